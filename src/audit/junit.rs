//! JUnit XML export of an audit.
//!
//! The whole audit is one test case; every failing module adds a
//! `<failure>` to it. CI servers then show a red build without knowing
//! anything about module versions.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::error::Result;

use super::record::ModuleVersionRecord;

/// Name of the single test case.
pub const TEST_CASE_NAME: &str = "Setup Version Test";
/// Class name reported for the test case.
pub const TEST_CASE_CLASSNAME: &str = "CompareVersionsCommand";
/// Message of each failure entry.
pub const FAILURE_MESSAGE: &str = "Setup Script Error";
/// Type of each failure entry.
pub const FAILURE_TYPE: &str = "SetupScriptVersionException";

/// A `<failure>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JunitFailure {
    pub message: String,
    pub kind: String,
}

/// A `<testcase>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JunitTestCase {
    pub name: String,
    pub classname: String,
    pub failures: Vec<JunitFailure>,
}

/// A `<testsuite>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct JunitSuite {
    pub name: String,
    pub timestamp: DateTime<Local>,
    pub time: Duration,
    pub test_cases: Vec<JunitTestCase>,
}

impl JunitSuite {
    /// Build the suite for an audit.
    ///
    /// Rows whose status text contains "error" (any case) become failures.
    pub fn from_audit(
        suite_name: &str,
        rows: &[ModuleVersionRecord],
        time: Duration,
        timestamp: DateTime<Local>,
    ) -> Self {
        let failures = rows
            .iter()
            .filter(|row| is_failure(row.status.label()))
            .map(|_| JunitFailure {
                message: FAILURE_MESSAGE.to_string(),
                kind: FAILURE_TYPE.to_string(),
            })
            .collect();

        Self {
            name: suite_name.to_string(),
            timestamp,
            time,
            test_cases: vec![JunitTestCase {
                name: TEST_CASE_NAME.to_string(),
                classname: TEST_CASE_CLASSNAME.to_string(),
                failures,
            }],
        }
    }

    /// Total number of failures across test cases.
    pub fn failure_count(&self) -> usize {
        self.test_cases.iter().map(|tc| tc.failures.len()).sum()
    }

    /// Serialize to an XML document.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuites>\n");

        let _ = writeln!(
            xml,
            "  <testsuite name=\"{}\" timestamp=\"{}\" time=\"{:.6}\" tests=\"{}\" failures=\"{}\">",
            escape(&self.name),
            self.timestamp.format("%Y-%m-%dT%H:%M:%S%:z"),
            self.time.as_secs_f64(),
            self.test_cases.len(),
            self.failure_count()
        );

        for case in &self.test_cases {
            let _ = write!(
                xml,
                "    <testcase name=\"{}\" classname=\"{}\"",
                escape(&case.name),
                escape(&case.classname)
            );

            if case.failures.is_empty() {
                xml.push_str("/>\n");
                continue;
            }

            xml.push_str(">\n");
            for failure in &case.failures {
                let _ = writeln!(
                    xml,
                    "      <failure message=\"{}\" type=\"{}\"/>",
                    escape(&failure.message),
                    escape(&failure.kind)
                );
            }
            xml.push_str("    </testcase>\n");
        }

        xml.push_str("  </testsuite>\n</testsuites>\n");
        xml
    }

    /// Write the XML document to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_xml())?;
        Ok(())
    }
}

/// Case-insensitive check for "error" in a status text.
pub fn is_failure(status_text: &str) -> bool {
    status_text.to_lowercase().contains("error")
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
