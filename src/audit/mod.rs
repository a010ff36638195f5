//! Module version audit.
//!
//! This module provides:
//! - [`ModuleRegistry`] and [`ResourceLookup`], the two data sources
//! - [`audit`], which compares declared versions with the ledger
//! - [`AuditReport`] for human or structured rendering
//! - [`JunitSuite`] for CI-friendly export
//!
//! # Example
//!
//! ```
//! use mageroot::audit::{audit, AuditReport, StaticLookup, StaticRegistry};
//! use mageroot::diagnostics::NullSink;
//!
//! let registry = StaticRegistry::new([("Foo_Bar", "2.0.1"), ("Baz_Qux", "1.3.0")]);
//! let lookup = StaticLookup::new()
//!     .with_schema("Foo_Bar", "2.0.1")
//!     .with_schema("Baz_Qux", "1.2.0");
//!
//! let outcome = audit(&registry, &lookup, false, &NullSink).unwrap();
//! assert_eq!(outcome.error_count, 1);
//!
//! let report = AuditReport::build(outcome, false, None);
//! assert_eq!(report.summary.unwrap().message, "1 error was found!");
//! ```

pub mod auditor;
pub mod junit;
pub mod record;
pub mod report;
pub mod source;

pub use auditor::{audit, AuditOutcome};
pub use junit::{JunitFailure, JunitSuite, JunitTestCase};
pub use record::{ModuleVersionRecord, Status};
pub use report::{sort_errors_last, summarize, AuditReport, DisplayHint, ReportRow, Summary};
pub use source::{
    ModuleEntry, ModuleRegistry, ResourceLookup, StaticLookup, StaticRegistry,
};
