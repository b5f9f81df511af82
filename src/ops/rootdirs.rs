//! `rootdirs`: root directories of modules.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::core::errors::NmodResult;
use crate::ops::scan::resolve_modules;
use crate::util::GlobalContext;

/// Return the sorted root directories of the named modules.
///
/// With no names, reports the module above the working directory (if
/// any) and every module below it.
pub fn rootdirs(ctx: &GlobalContext, names: &[String]) -> NmodResult<Vec<PathBuf>> {
    let roots: BTreeSet<PathBuf> = resolve_modules(ctx, names)?
        .into_iter()
        .map(|m| m.root().to_path_buf())
        .collect();

    Ok(roots.into_iter().collect())
}
