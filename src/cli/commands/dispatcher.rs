//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, LocateArgs};
use crate::config::{load_config, MagerootConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code when no installation could be found.
pub const EXIT_NOT_FOUND: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where to look for an installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    /// Directory the ancestor search starts from.
    pub start: PathBuf,
    /// Extra directories, `--root-dir` values first, then configured ones.
    pub extra_dirs: Vec<PathBuf>,
}

impl SearchSettings {
    /// Combine command-line root dirs with `locator.extra_dirs`.
    ///
    /// Relative configured dirs are taken relative to `start`.
    pub fn new(start: &Path, root_dirs: &[PathBuf], config: &MagerootConfig) -> Self {
        let configured = config.locator.extra_dirs.iter().map(|dir| {
            if dir.is_absolute() {
                dir.clone()
            } else {
                start.join(dir)
            }
        });

        Self {
            start: start.to_path_buf(),
            extra_dirs: root_dirs.iter().cloned().chain(configured).collect(),
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    start_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher searching from `start_dir`.
    pub fn new(start_dir: PathBuf) -> Self {
        Self { start_dir }
    }

    /// Get the start directory.
    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    /// Dispatch and execute a command.
    ///
    /// Loads configuration for commands that search for an installation,
    /// then routes the CLI subcommand to its implementation.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::CompareVersions(args)) => {
                let config = self.load_config(cli)?;
                let search = SearchSettings::new(&self.start_dir, &cli.root_dirs, &config);
                let cmd =
                    super::compare_versions::CompareVersionsCommand::new(search, config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Locate(args)) => self.locate(cli, args.clone(), ui),
            None => self.locate(cli, LocateArgs::default(), ui),
        }
    }

    fn locate(
        &self,
        cli: &Cli,
        args: LocateArgs,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let config = self.load_config(cli)?;
        let search = SearchSettings::new(&self.start_dir, &cli.root_dirs, &config);
        super::locate::LocateCommand::new(search, args).execute(ui)
    }

    fn load_config(&self, cli: &Cli) -> Result<MagerootConfig> {
        load_config(&self.start_dir, cli.config.as_deref())
    }
}
