//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::MagerootConfig;
use crate::config::CONFIG_FILENAME;
use crate::error::{MagerootError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.mageroot/mageroot.yaml`)
/// 2. Project config (`<start>/mageroot.yaml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config: ~/.mageroot/mageroot.yaml
    pub user_global: Option<PathBuf>,

    /// Project config: mageroot.yaml in the start directory
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given start directory.
    pub fn discover(start_dir: &Path) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: Self::find_project_config(start_dir),
        }
    }

    /// Find user's global config at ~/.mageroot/mageroot.yaml
    fn find_user_global() -> Option<PathBuf> {
        let path = dirs::home_dir()?.join(".mageroot").join(CONFIG_FILENAME);
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }

    /// Find project config at <start>/mageroot.yaml
    fn find_project_config(start_dir: &Path) -> Option<PathBuf> {
        let path = start_dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

/// Load a single config file and parse it into MagerootConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<MagerootConfig> {
    let value = load_config_value(path)?;
    from_value(value, path)
}

/// Parse YAML content into MagerootConfig.
pub fn parse_config(content: &str, source_path: &Path) -> Result<MagerootConfig> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| MagerootError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    from_value(value, source_path)
}

/// Load a config file as raw YAML Value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MagerootError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MagerootError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| MagerootError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge all discovered config files.
///
/// Missing files are fine; with none at all the defaults apply.
///
/// # Errors
///
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(start_dir: &Path) -> Result<MagerootConfig> {
    let paths = ConfigPaths::discover(start_dir);

    let mut configs = Vec::new();
    let mut last_path = start_dir.join(CONFIG_FILENAME);
    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        configs.push(load_config_value(path)?);
        last_path = path.clone();
    }

    from_value(merge_configs(&configs), &last_path)
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files.
pub fn load_config(start_dir: &Path, config_override: Option<&Path>) -> Result<MagerootConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(start_dir)
    }
}

fn from_value(value: serde_yaml::Value, source_path: &Path) -> Result<MagerootConfig> {
    if value.is_null() {
        return Ok(MagerootConfig::default());
    }

    serde_yaml::from_value(value).map_err(|e| MagerootError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
