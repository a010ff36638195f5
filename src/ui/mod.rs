//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for console output
//! - [`MockUI`] for capturing output in tests
//! - [`Table`] rendering in several formats
//!
//! # Example
//!
//! ```
//! use mageroot::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("No setup problems were found.");
//! assert!(ui.has_success("No setup problems"));
//! ```

pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::{Table, TableFormat};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, MagerootTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Theme used to style values before they are written.
    fn theme(&self) -> &MagerootTheme;

    /// Write command output. Shown in every mode.
    fn output(&mut self, text: &str);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
