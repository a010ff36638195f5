//! mageroot - Magento installation discovery and module version auditing.
//!
//! mageroot finds the root of a Magento installation from any directory
//! inside it (or pointed to by a stop file, a modman `.basedir` file or an
//! explicit folder) and compares every module's declared version with the
//! versions recorded in the installation's setup ledger.
//!
//! # Modules
//!
//! - [`app`] - Bootstrapping a located installation: module registry and ledger
//! - [`audit`] - Version comparison, report shaping and JUnit export
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and merging
//! - [`diagnostics`] - Sinks for search and audit diagnostics
//! - [`error`] - Error types and result aliases
//! - [`locator`] - Installation root discovery
//! - [`ui`] - Terminal output and table rendering
//!
//! # Example
//!
//! ```
//! use mageroot::audit::{audit, StaticLookup, StaticRegistry, Status};
//! use mageroot::diagnostics::NullSink;
//!
//! let registry = StaticRegistry::new([("Foo_Bar", "2.0.1"), ("Baz_Qux", "1.3.0")]);
//! let lookup = StaticLookup::new()
//!     .with_schema("Foo_Bar", "2.0.1")
//!     .with_schema("Baz_Qux", "1.2.0");
//!
//! let outcome = audit(&registry, &lookup, false, &NullSink).unwrap();
//! assert_eq!(outcome.rows[1].status, Status::Error);
//! assert_eq!(outcome.error_count, 1);
//! ```
//!
//! For file-based discovery and auditing, see the integration tests.

pub mod app;
pub mod audit;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod locator;
pub mod ui;

pub use error::{MagerootError, Result};
