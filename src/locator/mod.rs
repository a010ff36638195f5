//! Installation discovery.
//!
//! This module provides:
//! - [`SearchPath`] for building the list of candidate directories
//! - Marker detection and [`Generation`] classification in [`markers`]
//! - [`Locator`] which runs the whole search
//!
//! # Search order
//!
//! 1. Ancestors of the starting directory
//! 2. Targets of stop files found in those ancestors
//! 3. Targets of modman `.basedir` files
//! 4. Caller supplied folders (e.g. `--root-dir`)
//!
//! The list is searched from the bottom up, so later entries win.
//!
//! # Example
//!
//! ```
//! use mageroot::diagnostics::NullSink;
//! use mageroot::locator::{Generation, Locator};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join("app")).unwrap();
//! fs::write(temp.path().join("app/bootstrap.php"), "<?php").unwrap();
//!
//! let sink = NullSink;
//! let found = Locator::new(&sink).locate(temp.path(), &[]).unwrap();
//! assert_eq!(found.generation, Generation::Gen2);
//! ```

pub mod finder;
pub mod markers;
pub mod search_path;

use std::path::PathBuf;

use serde::Serialize;

pub use finder::Locator;
pub use markers::{classify, find_markers, Generation, LEGACY_MARKER, MARKER_FILES};
pub use search_path::{SearchPath, StopFileScan, MODMAN_BASEDIR_FILE};

/// A located installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallationRoot {
    /// Absolute installation directory.
    pub root: PathBuf,
    /// Detected generation.
    pub generation: Generation,
    /// Best-effort enterprise edition flag.
    pub is_enterprise: bool,
}
