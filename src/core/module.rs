//! A discovered module: its declared name and root directory.

use std::path::{Path, PathBuf};

use crate::core::errors::NmodResult;
use crate::core::manifest::ManifestRef;

/// A module declared by exactly one manifest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Module {
    name: String,
    root: PathBuf,
}

impl Module {
    /// Create a module from its parts.
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Module {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Load the module declared by `manifest`.
    pub fn load(manifest: &ManifestRef) -> NmodResult<Self> {
        let name = manifest.read_module_name()?;
        tracing::trace!("{} declares `{}`", manifest.path().display(), name);
        Ok(Module::new(name, manifest.root()))
    }

    /// The declared module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directory holding the module's manifest.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manifest::MANIFEST_NAME;
    use tempfile::TempDir;

    #[test]
    fn test_load_module() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(MANIFEST_NAME);
        std::fs::write(&path, "module root.example\n").unwrap();

        let module = Module::load(&ManifestRef::new(path)).unwrap();
        assert_eq!(module.name(), "root.example");
        assert_eq!(module.root(), tmp.path());
    }
}
