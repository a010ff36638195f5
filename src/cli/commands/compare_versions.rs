//! Compare-versions command implementation.
//!
//! The `mageroot compare-versions` command compares each module's declared
//! version with the schema and data versions recorded in the setup ledger.

use std::time::Instant;

use chrono::Local;

use crate::app::{Bootstrapper, FileBootstrapper};
use crate::audit::{audit, AuditReport, JunitSuite};
use crate::cli::args::CompareVersionsArgs;
use crate::config::MagerootConfig;
use crate::diagnostics::TracingSink;
use crate::error::Result;
use crate::ui::{Table, TableFormat, UserInterface};

use super::dispatcher::{Command, CommandResult, SearchSettings, EXIT_NOT_FOUND};
use super::locate::find_installation;

/// Name of the JUnit test suite.
pub const SUITE_NAME: &str = "mageroot: compare-versions";

/// The compare-versions command implementation.
pub struct CompareVersionsCommand {
    search: SearchSettings,
    config: MagerootConfig,
    args: CompareVersionsArgs,
}

impl CompareVersionsCommand {
    /// Create a new compare-versions command.
    pub fn new(search: SearchSettings, config: MagerootConfig, args: CompareVersionsArgs) -> Self {
        Self {
            search,
            config,
            args,
        }
    }

    /// Whether data versions take part in the comparison.
    pub fn check_data(&self) -> bool {
        !(self.args.ignore_data || self.config.audit.ignore_data)
    }

    /// Explicitly requested output format, flag before config.
    pub fn requested_format(&self) -> Option<&str> {
        self.args
            .format
            .as_deref()
            .or(self.config.audit.format.as_deref())
    }

    fn render(
        &self,
        report: &AuditReport,
        format: TableFormat,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let mut table = Table::new(report.headers());
        for (row, mut cells) in report.rows.iter().zip(report.cells()) {
            if let (Some(hint), Some(status)) = (row.hint, cells.last_mut()) {
                *status = ui.theme().format_hint(hint, status);
            }
            table.add_row(cells);
        }

        let rendered = table.render_as(format)?;
        ui.output(rendered.trim_end_matches('\n'));

        if let Some(summary) = &report.summary {
            let line = ui.theme().format_hint(summary.hint, &summary.message);
            ui.output(&line);
        }

        Ok(())
    }
}

impl Command for CompareVersionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let format = self
            .requested_format()
            .map(str::parse::<TableFormat>)
            .transpose()?
            .unwrap_or_default();

        let Some(located) = find_installation(&self.search, ui) else {
            return Ok(CommandResult::failure(EXIT_NOT_FOUND));
        };

        let ledger = self
            .args
            .ledger
            .as_deref()
            .or(self.config.audit.ledger.as_deref());
        let app = FileBootstrapper::new()
            .with_ledger(ledger)
            .bootstrap(&located.installation)?;

        let check_data = self.check_data();
        let started = Instant::now();
        let outcome = audit(&app.registry, &app.ledger, check_data, &TracingSink)?;
        tracing::debug!(
            "Audited {} modules, {} with mismatches",
            outcome.rows.len(),
            outcome.error_count
        );

        if outcome.rows.is_empty() {
            ui.warning(&format!(
                "No module descriptors found below {}",
                located.installation.root.display()
            ));
        }

        if let Some(path) = &self.args.log_junit {
            let suite = JunitSuite::from_audit(
                SUITE_NAME,
                &outcome.rows,
                started.elapsed(),
                Local::now(),
            );
            suite.write_to(path)?;
            ui.message(&format!(
                "Wrote JUnit report with {} failures to {}",
                suite.failure_count(),
                path.display()
            ));
            return Ok(CommandResult::success());
        }

        let report = AuditReport::build(outcome, check_data, self.requested_format());
        self.render(&report, format, ui)?;

        Ok(CommandResult::success())
    }
}
