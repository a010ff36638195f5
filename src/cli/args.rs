//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// mageroot - Find Magento installations and audit module versions.
#[derive(Debug, Parser)]
#[command(name = "mageroot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory to start searching from (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub start: Option<PathBuf>,

    /// Extra directory to search for an installation (repeatable)
    #[arg(long = "root-dir", global = true, value_name = "DIR")]
    pub root_dirs: Vec<PathBuf>,

    /// Path to config file (overrides mageroot.yaml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the installation root (default if no command specified)
    Locate(LocateArgs),

    /// Compare module versions with the setup ledger
    #[command(name = "compare-versions", alias = "sys:setup:compare-versions")]
    CompareVersions(CompareVersionsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `locate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LocateArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `compare-versions` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CompareVersionsArgs {
    /// Skip the data version comparison
    #[arg(long)]
    pub ignore_data: bool,

    /// Output format (table, csv, json, yaml)
    #[arg(long)]
    pub format: Option<String>,

    /// Write a JUnit XML report to this file instead of printing a table
    #[arg(long, value_name = "FILE")]
    pub log_junit: Option<PathBuf>,

    /// Ledger snapshot to compare against (relative to the installation root)
    #[arg(long, value_name = "FILE")]
    pub ledger: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
