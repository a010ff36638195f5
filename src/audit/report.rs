//! Turning an audit outcome into something to render.
//!
//! Without an explicit output format the report is meant for a human: error
//! rows sink to the bottom, every status carries a [`DisplayHint`], and a
//! summary line closes the table. With an explicit format the rows stay raw
//! and in registry order.

use serde::Serialize;

use super::auditor::AuditOutcome;
use super::record::{ModuleVersionRecord, Status};

/// Message shown when no module is out of sync.
pub const ALL_CLEAR_MESSAGE: &str = "No setup problems were found.";

/// Styling hint for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayHint {
    Info,
    Error,
}

impl DisplayHint {
    /// Hint used for a status value.
    pub fn for_status(status: Status) -> Self {
        match status {
            Status::Ok => Self::Info,
            Status::Error => Self::Error,
        }
    }
}

/// One report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub record: ModuleVersionRecord,
    /// Set only for human-oriented reports.
    pub hint: Option<DisplayHint>,
}

/// Closing line of a human-oriented report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub message: String,
    pub hint: DisplayHint,
}

/// Report ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub rows: Vec<ReportRow>,
    pub error_count: usize,
    pub check_data: bool,
    pub summary: Option<Summary>,
}

impl AuditReport {
    /// Build a report from an outcome.
    ///
    /// `format` is the explicitly requested output format, if any.
    pub fn build(outcome: AuditOutcome, check_data: bool, format: Option<&str>) -> Self {
        let AuditOutcome {
            mut rows,
            error_count,
        } = outcome;

        if format.is_some() {
            return Self {
                rows: rows
                    .into_iter()
                    .map(|record| ReportRow { record, hint: None })
                    .collect(),
                error_count,
                check_data,
                summary: None,
            };
        }

        sort_errors_last(&mut rows);

        Self {
            rows: rows
                .into_iter()
                .map(|record| {
                    let hint = Some(DisplayHint::for_status(record.status));
                    ReportRow { record, hint }
                })
                .collect(),
            error_count,
            check_data,
            summary: Some(summarize(error_count)),
        }
    }

    /// Column names, without `Data` when the data check is off.
    pub fn headers(&self) -> Vec<&'static str> {
        if self.check_data {
            vec!["Module", "DB", "Data", "Status"]
        } else {
            vec!["Module", "DB", "Status"]
        }
    }

    /// Cells for each row, matching [`AuditReport::headers`].
    pub fn cells(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let record = &row.record;
                let mut cells = vec![record.module.clone(), record.schema_version.clone()];
                if self.check_data {
                    cells.push(record.data_version.clone().unwrap_or_default());
                }
                cells.push(record.status.label().to_string());
                cells
            })
            .collect()
    }
}

/// Stable partition: `OK` rows first, `ERROR` rows after.
pub fn sort_errors_last(rows: &mut [ModuleVersionRecord]) {
    rows.sort_by_key(|row| row.status.is_error());
}

/// Summary line for `error_count` mismatches.
pub fn summarize(error_count: usize) -> Summary {
    if error_count == 0 {
        return Summary {
            message: ALL_CLEAR_MESSAGE.to_string(),
            hint: DisplayHint::Info,
        };
    }

    let (noun, verb) = if error_count == 1 {
        ("error", "was")
    } else {
        ("errors", "were")
    };

    Summary {
        message: format!("{} {} {} found!", error_count, noun, verb),
        hint: DisplayHint::Error,
    }
}
