//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and resolves the search settings
//! they share.

pub mod compare_versions;
pub mod completions;
pub mod dispatcher;
pub mod locate;

pub use compare_versions::CompareVersionsCommand;
pub use completions::CompletionsCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult, SearchSettings};
pub use locate::{find_installation, LocateCommand};
