//! Global context for nmod operations.
//!
//! Provides centralized access to the working directory and the loaded
//! configuration. Every command builds its own context, so nothing is
//! shared between invocations.

use std::path::{Path, PathBuf};

use crate::core::errors::{NmodError, NmodResult};
use crate::util::config::{global_config_path, load_config, Config, ScanConfig};

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory (canonical)
    cwd: PathBuf,

    /// Merged configuration
    config: Config,
}

impl GlobalContext {
    /// Create a context for the process working directory.
    ///
    /// `global_config` overrides the default global config location.
    pub fn new(global_config: Option<&Path>) -> NmodResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| NmodError::io(".", e))?;
        Self::with_cwd(cwd, global_config)
    }

    /// Create a context for a specific working directory.
    pub fn with_cwd(cwd: PathBuf, global_config: Option<&Path>) -> NmodResult<Self> {
        let cwd = cwd.canonicalize().map_err(|e| NmodError::io(&cwd, e))?;

        let default_global = global_config_path();
        let global = global_config.or(default_global.as_deref());
        let config = load_config(global, &cwd)?;

        Ok(GlobalContext { cwd, config })
    }

    /// Create a context with an explicit configuration, skipping config files.
    pub fn with_config(cwd: PathBuf, config: Config) -> NmodResult<Self> {
        let cwd = cwd.canonicalize().map_err(|e| NmodError::io(&cwd, e))?;
        Ok(GlobalContext { cwd, config })
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the scan settings.
    pub fn scan(&self) -> &ScanConfig {
        &self.config.scan
    }
}
