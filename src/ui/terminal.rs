//! Styled terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, BoilerTheme, NonInteractiveUI, OutputMode, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: BoilerTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            BoilerTheme::new()
        } else {
            BoilerTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
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

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_command_output() && !output.trim().is_empty() {
            writeln!(self.term, "{}", self.theme.format_command_output(output)).ok();
        }
    }
}

/// Create the styled UI on a terminal and the plain one otherwise.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    if Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_terminal_ui_accepts_all_calls() {
        let mut ui = TerminalUI::new(OutputMode::Quiet);
        ui.message("hidden");
        ui.success("hidden");
        ui.warning("hidden");
        ui.show_header("hidden");
        ui.command_output("hidden");
    }

    #[test]
    fn create_ui_outside_a_terminal() {
        // Test runs capture stdout, so this is the plain UI.
        let mut ui = create_ui(OutputMode::Quiet);
        ui.message("hidden");
    }
}
