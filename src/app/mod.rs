//! Application bootstrap and file-based audit data sources.
//!
//! - [`bootstrap`] - turning an [`InstallationRoot`](crate::locator::InstallationRoot)
//!   into an [`Application`]
//! - [`registry`] - module list read from module descriptors
//! - [`ledger`] - applied upgrade versions read from a snapshot export

pub mod bootstrap;
pub mod ledger;
pub mod registry;

pub use bootstrap::{Application, Bootstrapper, FileBootstrapper};
pub use ledger::{resolve_ledger_path, LedgerEntry, LedgerSnapshot, DEFAULT_LEDGER_PATH};
pub use registry::{parse_legacy_config_xml, parse_module_xml, XmlModuleRegistry};
