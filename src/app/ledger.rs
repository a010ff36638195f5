//! Upgrade ledger loaded from a snapshot file.
//!
//! The ledger lives in the application database (`setup_module` /
//! `core_resource`). mageroot does not talk to databases; instead it reads
//! an export of that table as JSON or YAML:
//!
//! ```yaml
//! - module: Foo_Bar
//!   schema_version: 2.0.1
//!   data_version: 2.0.1
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::audit::ResourceLookup;
use crate::error::{MagerootError, Result};

/// Default snapshot location, relative to the installation root.
pub const DEFAULT_LEDGER_PATH: &str = "var/mageroot/ledger.json";

/// One exported ledger row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub module: String,
    #[serde(default, alias = "version")]
    pub schema_version: Option<String>,
    #[serde(default)]
    pub data_version: Option<String>,
}

/// Ledger backed by an exported snapshot.
#[derive(Debug, Clone, Default)]
pub struct LedgerSnapshot {
    entries: HashMap<String, LedgerEntry>,
}

impl LedgerSnapshot {
    /// Build a snapshot from rows. Later rows win on duplicate modules.
    pub fn from_entries(entries: Vec<LedgerEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.module.clone(), e))
                .collect(),
        }
    }

    /// Load a snapshot; `.yaml`/`.yml` files are YAML, everything else JSON.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file can't be read and `LedgerParseError` if its
    /// content is not a list of ledger rows.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse snapshot content; `source_path` picks the format and is used
    /// for error reporting.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        let is_yaml = source_path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        let parse_error = |message: String| MagerootError::LedgerParseError {
            path: source_path.to_path_buf(),
            message,
        };

        let entries: Vec<LedgerEntry> = if is_yaml {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
        } else {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
        };

        Ok(Self::from_entries(entries))
    }

    /// Number of modules in the ledger.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the ledger has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceLookup for LedgerSnapshot {
    fn schema_version(&self, module: &str) -> String {
        self.entries
            .get(module)
            .and_then(|e| e.schema_version.clone())
            .unwrap_or_default()
    }

    fn data_version(&self, module: &str) -> String {
        self.entries
            .get(module)
            .and_then(|e| e.data_version.clone())
            .unwrap_or_default()
    }
}

/// Resolve a configured ledger path against the installation root.
pub fn resolve_ledger_path(root: &Path, configured: Option<&Path>) -> PathBuf {
    match configured {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => root.join(path),
        None => root.join(DEFAULT_LEDGER_PATH),
    }
}
