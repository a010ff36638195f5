//! Configuration loading and parsing for mageroot.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Configuration File Locations
//!
//! mageroot discovers and merges configuration in this order:
//! 1. User global config (`~/.mageroot/mageroot.yaml`)
//! 2. Project config (`mageroot.yaml` in the start directory)
//!
//! `--config` replaces discovery with a single file.
//!
//! The config filename also names the locator's stop file: a dot plus the
//! file stem, i.e. `.mageroot`.

pub mod loader;
pub mod merger;
pub mod schema;

/// File name of the tool configuration.
pub const CONFIG_FILENAME: &str = "mageroot.yaml";

pub use loader::{
    load_config, load_config_file, load_config_value, load_merged_config, parse_config,
    ConfigPaths,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{AuditSettings, LocatorSettings, MagerootConfig};
