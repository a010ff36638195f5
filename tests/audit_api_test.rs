//! Integration tests for the version audit.

use chrono::{Local, TimeZone};
use mageroot::app::{Bootstrapper, FileBootstrapper};
use mageroot::audit::{
    audit, summarize, AuditReport, DisplayHint, JunitSuite, StaticLookup, StaticRegistry, Status,
};
use mageroot::diagnostics::NullSink;
use mageroot::locator::Locator;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn report_puts_errors_last_in_stable_order() {
    let registry = StaticRegistry::new([("a", "1"), ("b", "1"), ("c", "1"), ("d", "1")]);
    let lookup = StaticLookup::new().with_schema("a", "1").with_schema("c", "1");

    let outcome = audit(&registry, &lookup, false, &NullSink).unwrap();
    let report = AuditReport::build(outcome, false, None);

    let order: Vec<_> = report.rows.iter().map(|r| r.record.module.as_str()).collect();
    assert_eq!(order, vec!["a", "c", "b", "d"]);
    assert_eq!(report.rows[2].hint, Some(DisplayHint::Error));
    assert_eq!(report.summary.unwrap().message, "2 errors were found!");
}

#[test]
fn summary_pluralization() {
    assert_eq!(summarize(0).message, "No setup problems were found.");
    assert_eq!(summarize(1).message, "1 error was found!");
    assert_eq!(summarize(2).message, "2 errors were found!");
}

#[test]
fn empty_ledger_entry_is_an_error() {
    let registry = StaticRegistry::new([("Foo_Bar", "1.0.0")]);
    let outcome = audit(&registry, &StaticLookup::new(), false, &NullSink).unwrap();
    assert_eq!(outcome.rows[0].status, Status::Error);
}

#[test]
fn junit_exports_differ_only_in_timing() {
    let registry = StaticRegistry::new([("Foo_Bar", "2.0.1"), ("Baz_Qux", "1.3.0")]);
    let lookup = StaticLookup::new()
        .with_schema("Foo_Bar", "2.0.1")
        .with_schema("Baz_Qux", "1.2.0");
    let outcome = audit(&registry, &lookup, false, &NullSink).unwrap();

    let first = JunitSuite::from_audit(
        "suite",
        &outcome.rows,
        Duration::from_millis(5),
        Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
    );
    let second = JunitSuite::from_audit(
        "suite",
        &outcome.rows,
        Duration::from_millis(9),
        Local.with_ymd_and_hms(2024, 6, 7, 8, 9, 10).unwrap(),
    );

    assert_eq!(first.test_cases, second.test_cases);
    assert_eq!(first.failure_count(), 1);
    assert_ne!(first.to_xml(), second.to_xml());

    let timing = Regex::new(r#"\b(timestamp|time)="[^"]*""#).unwrap();
    let masked_first = timing.replace_all(&first.to_xml(), r#"$1="""#).into_owned();
    let masked_second = timing.replace_all(&second.to_xml(), r#"$1="""#).into_owned();
    assert_eq!(masked_first, masked_second);
    assert!(masked_first.contains(r#"tests="1" failures="1">"#));
}

#[test]
fn legacy_installation_end_to_end() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(&root.join("app/Mage.php"), "<?php");
    fs::create_dir_all(root.join("app/etc")).unwrap();
    write(
        &root.join("app/code/local/Foo/Bar/etc/config.xml"),
        "<config><modules><Foo_Bar><version>0.2.0</version></Foo_Bar></modules></config>",
    );
    write(
        &root.join("var/mageroot/ledger.json"),
        r#"[{"module": "Foo_Bar", "schema_version": "0.2.0", "data_version": "0.1.0"}]"#,
    );

    let installation = Locator::new(&NullSink).locate(root, &[]).unwrap();
    let app = FileBootstrapper::new().bootstrap(&installation).unwrap();

    let strict = audit(&app.registry, &app.ledger, true, &NullSink).unwrap();
    assert_eq!(strict.error_count, 1);

    let lenient = audit(&app.registry, &app.ledger, false, &NullSink).unwrap();
    assert!(lenient.is_clean());
}
