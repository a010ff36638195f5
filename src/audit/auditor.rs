//! Version audit over all installed modules.

use crate::diagnostics::DiagnosticsSink;
use crate::error::Result;

use super::record::ModuleVersionRecord;
use super::source::{ModuleRegistry, ResourceLookup};

/// Raw audit result: rows in registry order plus the error count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditOutcome {
    pub rows: Vec<ModuleVersionRecord>,
    pub error_count: usize,
}

impl AuditOutcome {
    /// Check if every module passed.
    pub fn is_clean(&self) -> bool {
        self.error_count == 0
    }
}

/// Compare every module's declared version with the ledger.
///
/// Both ledger versions are looked up for every module. The data version
/// only reaches the record, and the verdict, when `check_data` is set.
///
/// # Errors
///
/// Only fails when the registry cannot enumerate modules. A missing
/// ledger entry is an `ERROR` row, not an error.
pub fn audit(
    registry: &dyn ModuleRegistry,
    lookup: &dyn ResourceLookup,
    check_data: bool,
    sink: &dyn DiagnosticsSink,
) -> Result<AuditOutcome> {
    let mut outcome = AuditOutcome::default();

    for module in registry.modules()? {
        let schema_version = lookup.schema_version(&module.name);
        let data_version = lookup.data_version(&module.name);
        let data_version = check_data.then_some(data_version);

        let record = ModuleVersionRecord::evaluate(
            module.name,
            module.declared_version,
            schema_version,
            data_version,
        );

        if record.status.is_error() {
            outcome.error_count += 1;
            sink.record(&format!(
                "Module {} declares {} but ledger has schema {:?} data {:?}",
                record.module, record.declared_version, record.schema_version, record.data_version
            ));
        }

        outcome.rows.push(record);
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::record::Status;
    use crate::audit::source::{StaticLookup, StaticRegistry};
    use crate::diagnostics::{NullSink, RecordingSink};

    fn statuses(outcome: &AuditOutcome) -> Vec<(&str, Status)> {
        outcome
            .rows
            .iter()
            .map(|r| (r.module.as_str(), r.status))
            .collect()
    }

    #[test]
    fn scenario_without_data_check() {
        let registry = StaticRegistry::new([("Foo_Bar", "2.0.1"), ("Baz_Qux", "1.3.0")]);
        let lookup = StaticLookup::new()
            .with_schema("Foo_Bar", "2.0.1")
            .with_schema("Baz_Qux", "1.2.0");

        let outcome = audit(&registry, &lookup, false, &NullSink).unwrap();

        assert_eq!(
            statuses(&outcome),
            vec![("Foo_Bar", Status::Ok), ("Baz_Qux", Status::Error)]
        );
        assert_eq!(outcome.error_count, 1);
        assert!(outcome.rows.iter().all(|r| r.data_version.is_none()));
    }

    #[test]
    fn data_check_adds_data_comparison() {
        let registry = StaticRegistry::new([("Foo_Bar", "2.0.1")]);
        let lookup = StaticLookup::new()
            .with_schema("Foo_Bar", "2.0.1")
            .with_data("Foo_Bar", "2.0.0");

        let checked = audit(&registry, &lookup, true, &NullSink).unwrap();
        assert_eq!(checked.error_count, 1);
        assert_eq!(checked.rows[0].data_version.as_deref(), Some("2.0.0"));

        let ignored = audit(&registry, &lookup, false, &NullSink).unwrap();
        assert!(ignored.is_clean());
    }

    #[test]
    fn registry_order_is_kept() {
        let registry = StaticRegistry::new([("Z_Mod", "1"), ("A_Mod", "1"), ("M_Mod", "1")]);
        let outcome = audit(&registry, &StaticLookup::new(), false, &NullSink).unwrap();

        let names: Vec<_> = outcome.rows.iter().map(|r| r.module.as_str()).collect();
        assert_eq!(names, vec!["Z_Mod", "A_Mod", "M_Mod"]);
        assert_eq!(outcome.error_count, 3);
    }

    #[test]
    fn empty_registry_is_clean() {
        let outcome = audit(
            &StaticRegistry::default(),
            &StaticLookup::new(),
            true,
            &NullSink,
        )
        .unwrap();
        assert!(outcome.rows.is_empty());
        assert!(outcome.is_clean());
    }

    #[test]
    fn mismatches_are_recorded() {
        let registry = StaticRegistry::new([("Foo_Bar", "1.0.0")]);
        let sink = RecordingSink::new();
        audit(&registry, &StaticLookup::new(), false, &sink).unwrap();
        assert!(sink.has_event("Module Foo_Bar declares 1.0.0"));
    }
}
