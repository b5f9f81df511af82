//! Configuration file support for nmod.
//!
//! nmod reads two optional configuration files:
//! - Global: `<config dir>/nmod/config.toml` - User-wide defaults
//! - Project: `.nmod.toml` in the working directory - Project overrides
//!
//! Project config takes precedence over global config.
//!
//! ```toml
//! [scan]
//! manifest_name = "go.mod"
//! ignore = ["node_modules", ".git"]
//! follow_links = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::errors::{NmodError, NmodResult};
use crate::core::manifest::MANIFEST_NAME;

/// File name of the project-local config.
pub const PROJECT_CONFIG_NAME: &str = ".nmod.toml";

/// nmod configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Directory scanning settings
    pub scan: ScanConfig,
}

/// Settings that shape upward and downward searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Name of the manifest file marking a module root
    pub manifest_name: String,

    /// Directory names never descended into by downward searches
    pub ignore: Vec<String>,

    /// Follow symlinked directories during downward searches
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            manifest_name: MANIFEST_NAME.to_string(),
            ignore: Vec::new(),
            follow_links: false,
        }
    }
}

impl ScanConfig {
    /// Check whether a directory name is on the ignore list.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.iter().any(|i| i == name)
    }
}

/// Raw file layout; every key is optional so files can be merged.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    scan: RawScanConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawScanConfig {
    manifest_name: Option<String>,
    ignore: Option<Vec<String>>,
    follow_links: Option<bool>,
}

impl Config {
    /// Merge a config file into this one if it exists (file takes precedence).
    pub fn merge_file(&mut self, path: &Path) -> NmodResult<()> {
        if !path.is_file() {
            return Ok(());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| NmodError::io(path, e))?;
        let raw: RawConfig = toml::from_str(&contents).map_err(|e| NmodError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;

        if let Some(name) = raw.scan.manifest_name {
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(NmodError::Config {
                    path: path.to_path_buf(),
                    message: format!("`scan.manifest_name` must be a plain file name, got `{}`", name),
                });
            }
            self.scan.manifest_name = name;
        }
        if let Some(ignore) = raw.scan.ignore {
            self.scan.ignore = ignore;
        }
        if let Some(follow_links) = raw.scan.follow_links {
            self.scan.follow_links = follow_links;
        }

        tracing::debug!("loaded config from {}", path.display());
        Ok(())
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (`.nmod.toml` in `cwd`)
/// 2. Global config (`global_path`)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, cwd: &Path) -> NmodResult<Config> {
    let mut config = Config::default();

    if let Some(global) = global_path {
        config.merge_file(global)?;
    }
    config.merge_file(&project_config_path(cwd))?;

    Ok(config)
}

/// Get the global config path (`<config dir>/nmod/config.toml`).
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "nmod").map(|d| d.config_dir().join("config.toml"))
}

/// Get the project config path (`.nmod.toml`).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_CONFIG_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.scan.manifest_name, "go.mod");
        assert!(config.scan.ignore.is_empty());
        assert!(!config.scan.follow_links);
    }

    #[test]
    fn test_missing_files_give_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(Some(tmp.path().join("nope.toml").as_path()), tmp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_project_overrides_global() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        std::fs::write(
            &global,
            "[scan]\nignore = [\"vendor\"]\nfollow_links = true\n",
        )
        .unwrap();
        std::fs::write(
            tmp.path().join(PROJECT_CONFIG_NAME),
            "[scan]\nignore = [\"testdata\", \".git\"]\n",
        )
        .unwrap();

        let config = load_config(Some(global.as_path()), tmp.path()).unwrap();
        assert_eq!(config.scan.ignore, vec!["testdata", ".git"]);
        // Not set by the project file, so the global value stays.
        assert!(config.scan.follow_links);
        assert!(config.scan.is_ignored(".git"));
        assert!(!config.scan.is_ignored("vendor"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(PROJECT_CONFIG_NAME), "[scan\n").unwrap();

        let err = load_config(None, tmp.path()).unwrap_err();
        assert!(matches!(err, NmodError::Config { .. }));
    }

    #[test]
    fn test_manifest_name_must_be_file_name() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[scan]\nmanifest_name = \"sub/go.mod\"\n").unwrap();

        let err = Config::default().merge_file(&path).unwrap_err();
        assert!(matches!(err, NmodError::Config { .. }));
    }
}
