//! Shared discovery steps for the resolver commands.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::errors::{NmodError, NmodResult};
use crate::core::manifest::ManifestRef;
use crate::core::module::Module;
use crate::core::search::{search_downward, search_upward};
use crate::util::GlobalContext;

/// Manifests visible from the working directory: the closest one above
/// it (if any) plus every one below it.
pub fn default_manifests(ctx: &GlobalContext) -> NmodResult<BTreeSet<ManifestRef>> {
    let mut manifests = search_downward(ctx.cwd(), ctx.scan())?;

    // Standing outside any module is fine; only the downward set counts then.
    if let Some(above) = search_upward(ctx.cwd(), ctx.scan())? {
        manifests.insert(above);
    }

    Ok(manifests)
}

/// Read the module declared by each manifest.
pub fn load_modules<'a>(
    manifests: impl IntoIterator<Item = &'a ManifestRef>,
) -> NmodResult<BTreeSet<Module>> {
    manifests.into_iter().map(Module::load).collect()
}

/// Modules visible from the working directory.
pub fn default_modules(ctx: &GlobalContext) -> NmodResult<BTreeSet<Module>> {
    load_modules(&default_manifests(ctx)?)
}

/// Resolve module names to the modules declaring them.
///
/// An empty `names` slice yields the default module set. Every name must
/// be declared by at least one visible manifest; a name declared more
/// than once yields every declaring module.
pub fn resolve_modules(ctx: &GlobalContext, names: &[String]) -> NmodResult<BTreeSet<Module>> {
    let visible = default_modules(ctx)?;
    if names.is_empty() {
        return Ok(visible);
    }

    let mut by_name: BTreeMap<&str, Vec<&Module>> = BTreeMap::new();
    for module in &visible {
        by_name.entry(module.name()).or_default().push(module);
    }

    let mut resolved = BTreeSet::new();
    for name in names {
        let declaring = by_name
            .get(name.as_str())
            .ok_or_else(|| NmodError::ModuleNotFound {
                module: name.clone(),
            })?;
        tracing::debug!("`{}` is declared by {} manifest(s)", name, declaring.len());
        resolved.extend(declaring.iter().map(|m| (*m).clone()));
    }

    Ok(resolved)
}
