//! Locate command implementation.
//!
//! The `mageroot locate` command prints the installation root found from
//! the start directory.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::args::LocateArgs;
use crate::diagnostics::TracingSink;
use crate::error::{MagerootError, Result};
use crate::locator::{InstallationRoot, Locator};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, SearchSettings, EXIT_NOT_FOUND};

/// Result of a successful search, as shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct LocateReport {
    #[serde(flatten)]
    pub installation: InstallationRoot,
    pub major_version: u8,
    pub stop_file_folder: Option<PathBuf>,
}

/// Run the locator for `search`, reporting a failed search on `ui`.
///
/// In verbose mode a failed search also lists every folder that was tried.
pub fn find_installation(
    search: &SearchSettings,
    ui: &mut dyn UserInterface,
) -> Option<LocateReport> {
    let sink = TracingSink;
    let mut locator = Locator::new(&sink);

    if let Some(installation) = locator.locate(&search.start, &search.extra_dirs) {
        return Some(LocateReport {
            major_version: installation.generation.major_version(),
            installation,
            stop_file_folder: locator.stop_file_folder().map(|p| p.to_path_buf()),
        });
    }

    ui.error(&MagerootError::LocateFailed {
        start: search.start.clone(),
    }
    .to_string());

    if ui.output_mode().is_verbose() {
        if let Some(folder) = locator.stop_file_folder() {
            ui.message(&format!(
                "Stop file {} found in {}",
                locator.stop_file_name(),
                folder.display()
            ));
        }
        ui.message("Searched folders:");
        let folders: Vec<String> = locator
            .search_path()
            .search_order()
            .map(|folder| format!("  {}", ui.theme().dim.apply_to(folder.display())))
            .collect();
        for folder in folders {
            ui.message(&folder);
        }
    }

    None
}

/// The locate command implementation.
pub struct LocateCommand {
    search: SearchSettings,
    args: LocateArgs,
}

impl LocateCommand {
    /// Create a new locate command.
    pub fn new(search: SearchSettings, args: LocateArgs) -> Self {
        Self { search, args }
    }

    /// Get the search settings.
    pub fn search(&self) -> &SearchSettings {
        &self.search
    }
}

impl Command for LocateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(report) = find_installation(&self.search, ui) else {
            return Ok(CommandResult::failure(EXIT_NOT_FOUND));
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| MagerootError::Other(e.into()))?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        let root = report.installation.root.display().to_string();
        if !ui.output_mode().shows_status() {
            ui.output(&root);
            return Ok(CommandResult::success());
        }

        let edition = if report.installation.is_enterprise {
            "Enterprise"
        } else {
            "Community"
        };

        let mut lines = vec![
            ui.theme().format_key_value("Root", &root),
            ui.theme().format_key_value(
                "Generation",
                &format!(
                    "{} (Magento {})",
                    report.installation.generation, report.major_version
                ),
            ),
            ui.theme().format_key_value("Edition", edition),
        ];
        if let Some(folder) = &report.stop_file_folder {
            lines.push(
                ui.theme()
                    .format_key_value("Stop file", &folder.display().to_string()),
            );
        }

        for line in lines {
            ui.output(&line);
        }

        Ok(CommandResult::success())
    }
}
