//! Collaborator seams for the version audit.
//!
//! The auditor never knows where module versions come from. A
//! [`ModuleRegistry`] enumerates installed modules with their declared
//! version, a [`ResourceLookup`] answers what the upgrade ledger recorded.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An installed module as reported by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    /// Unique module name, e.g. `Magento_Catalog`.
    pub name: String,
    /// Version the module's code declares. May be empty.
    pub declared_version: String,
}

impl ModuleEntry {
    /// Create a module entry.
    pub fn new(name: impl Into<String>, declared_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_version: declared_version.into(),
        }
    }
}

/// Source of installed modules.
pub trait ModuleRegistry {
    /// All installed modules, in the registry's fixed order.
    fn modules(&self) -> Result<Vec<ModuleEntry>>;
}

/// Source of applied upgrade versions.
///
/// Modules with no ledger entry answer with an empty string.
pub trait ResourceLookup {
    /// Applied schema version for `module`.
    fn schema_version(&self, module: &str) -> String;

    /// Applied data version for `module`.
    fn data_version(&self, module: &str) -> String;
}

/// In-memory registry, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    modules: Vec<ModuleEntry>,
}

impl StaticRegistry {
    /// Create a registry from `(name, declared_version)` pairs.
    pub fn new<I, N, V>(modules: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            modules: modules
                .into_iter()
                .map(|(n, v)| ModuleEntry::new(n, v))
                .collect(),
        }
    }
}

impl ModuleRegistry for StaticRegistry {
    fn modules(&self) -> Result<Vec<ModuleEntry>> {
        Ok(self.modules.clone())
    }
}

/// In-memory ledger, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    schema: HashMap<String, String>,
    data: HashMap<String, String>,
}

impl StaticLookup {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a schema version.
    pub fn with_schema(mut self, module: &str, version: &str) -> Self {
        self.schema.insert(module.to_string(), version.to_string());
        self
    }

    /// Record a data version.
    pub fn with_data(mut self, module: &str, version: &str) -> Self {
        self.data.insert(module.to_string(), version.to_string());
        self
    }
}

impl ResourceLookup for StaticLookup {
    fn schema_version(&self, module: &str) -> String {
        self.schema.get(module).cloned().unwrap_or_default()
    }

    fn data_version(&self, module: &str) -> String {
        self.data.get(module).cloned().unwrap_or_default()
    }
}
