//! Error types for module discovery.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout `core` and `ops`.
pub type NmodResult<T> = Result<T, NmodError>;

/// Error raised while discovering or resolving modules.
///
/// An absent manifest above an implicit starting point is not an error;
/// upward searches report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum NmodError {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{} doesn't seem to have a module declaration", path.display())]
    NoDeclaration { path: PathBuf },

    #[error(
        "{} doesn't have a {manifest_name}, nor do any of the directories above it",
        dir.display()
    )]
    NoModuleAbove { dir: PathBuf, manifest_name: String },

    #[error("module `{module}` is not declared above or below the current directory")]
    ModuleNotFound { module: String },

    #[error("invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl NmodError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        NmodError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn walk(root: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        // walkdir knows which entry failed; fall back to the walk root.
        let path = source
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.into());
        NmodError::Walk { path, source }
    }

    /// A short hint shown below the error message, if one applies.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            NmodError::NoDeclaration { .. } => {
                Some("add a line of the form `module <name>` to the manifest")
            }
            NmodError::NoModuleAbove { .. } => {
                Some("pass a directory inside a module, or run `nmod modules` without arguments")
            }
            NmodError::ModuleNotFound { .. } => {
                Some("run `nmod modules` to list the modules nmod can see from here")
            }
            NmodError::Io { .. } | NmodError::Walk { .. } | NmodError::Config { .. } => None,
        }
    }
}
