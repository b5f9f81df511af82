//! `modules`: module names of directories.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::core::errors::{NmodError, NmodResult};
use crate::core::search::search_upward;
use crate::ops::scan::{default_manifests, load_modules};
use crate::util::fs::normalize_path;
use crate::util::GlobalContext;

/// Options for the `modules` operation.
#[derive(Debug, Clone, Default)]
pub struct ModulesOptions {
    /// Directories whose modules to report; relative paths resolve
    /// against the working directory. Empty means "the working directory
    /// and everything below it".
    pub dirs: Vec<PathBuf>,
}

/// Return the deduplicated, sorted module names for the given directories.
///
/// Each explicit directory must have a manifest in itself or an ancestor.
pub fn modules(ctx: &GlobalContext, opts: &ModulesOptions) -> NmodResult<Vec<String>> {
    let manifests = if opts.dirs.is_empty() {
        default_manifests(ctx)?
    } else {
        let mut manifests = BTreeSet::new();
        for dir in &opts.dirs {
            let abs = normalize_path(ctx.cwd(), dir).map_err(|e| NmodError::io(dir, e))?;
            let manifest =
                search_upward(&abs, ctx.scan())?.ok_or_else(|| NmodError::NoModuleAbove {
                    dir: abs.clone(),
                    manifest_name: ctx.scan().manifest_name.clone(),
                })?;
            manifests.insert(manifest);
        }
        manifests
    };

    let names: BTreeSet<String> = load_modules(&manifests)?
        .into_iter()
        .map(|m| m.name().to_string())
        .collect();

    Ok(names.into_iter().collect())
}
