//! Console UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, MagerootTheme, OutputMode, UserInterface};

/// Console UI writing results to stdout and problems to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: MagerootTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            MagerootTheme::new()
        } else {
            MagerootTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn theme(&self) -> &MagerootTheme {
        &self.theme
    }

    fn output(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Create the console UI, honoring `--no-color` and `NO_COLOR`.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    let colors = !no_color && should_use_colors();
    if !colors {
        console::set_colors_enabled(false);
    }
    Box::new(TerminalUI::new(mode, colors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_keeps_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet, false);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn plain_terminal_ui_uses_plain_theme() {
        let ui = TerminalUI::new(OutputMode::Normal, false);
        assert_eq!(ui.theme().format_key_value("Root", "/srv"), "Root: /srv");
    }

    #[test]
    fn create_ui_without_color() {
        let ui = create_ui(OutputMode::Verbose, true);
        assert!(ui.output_mode().is_verbose());
    }
}
