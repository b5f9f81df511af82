//! `dirs`: every directory owned by modules.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::core::errors::NmodResult;
use crate::core::search::owned_dirs;
use crate::ops::scan::resolve_modules;
use crate::util::GlobalContext;

/// Return the sorted directories belonging to the named modules.
///
/// A module owns its root and every directory below it, except those
/// under a nested module root. With no names, the default module set is
/// used (see [`crate::ops::rootdirs::rootdirs`]).
pub fn dirs(ctx: &GlobalContext, names: &[String]) -> NmodResult<Vec<PathBuf>> {
    let mut owned = BTreeSet::new();
    for module in resolve_modules(ctx, names)? {
        let module_dirs = owned_dirs(module.root(), ctx.scan())?;
        tracing::debug!("`{}` owns {} dir(s)", module.name(), module_dirs.len());
        owned.extend(module_dirs);
    }

    Ok(owned.into_iter().collect())
}
