//! Bringing up a located installation far enough to audit it.

use std::path::{Path, PathBuf};

use crate::error::{MagerootError, Result};
use crate::locator::InstallationRoot;

use super::ledger::{resolve_ledger_path, LedgerSnapshot};
use super::registry::XmlModuleRegistry;

/// An initialized installation: its root plus the two audit data sources.
#[derive(Debug, Clone)]
pub struct Application {
    pub installation: InstallationRoot,
    pub registry: XmlModuleRegistry,
    pub ledger: LedgerSnapshot,
}

/// Initializes an application from a located root.
pub trait Bootstrapper {
    /// Initialize the installation at `installation`.
    fn bootstrap(&self, installation: &InstallationRoot) -> Result<Application>;
}

/// Bootstrapper reading descriptors and a ledger snapshot from disk.
#[derive(Debug, Clone, Default)]
pub struct FileBootstrapper {
    ledger: Option<PathBuf>,
}

impl FileBootstrapper {
    /// Create a bootstrapper using the default ledger location.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the ledger from `path` (relative paths are below the root).
    pub fn with_ledger(mut self, path: Option<&Path>) -> Self {
        self.ledger = path.map(Path::to_path_buf);
        self
    }
}

impl Bootstrapper for FileBootstrapper {
    fn bootstrap(&self, installation: &InstallationRoot) -> Result<Application> {
        let root = &installation.root;

        if !root.join("app").join("etc").is_dir() {
            return Err(MagerootError::BootstrapFailed {
                root: root.clone(),
                message: "app/etc directory is missing".to_string(),
            });
        }

        let ledger_path = resolve_ledger_path(root, self.ledger.as_deref());
        if !ledger_path.is_file() {
            return Err(MagerootError::BootstrapFailed {
                root: root.clone(),
                message: format!("ledger snapshot not found at {}", ledger_path.display()),
            });
        }

        tracing::debug!("Loading ledger snapshot from {}", ledger_path.display());
        let ledger = LedgerSnapshot::load(&ledger_path)?;

        Ok(Application {
            installation: installation.clone(),
            registry: XmlModuleRegistry::new(root, installation.generation),
            ledger,
        })
    }
}
