//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use boiler::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Installing Demo");
//! ui.error("No paths configured");
//!
//! assert!(ui.has_message("Installing Demo"));
//! assert!(ui.has_error("No paths configured"));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    command_output: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all command output that would have been echoed.
    pub fn command_outputs(&self) -> &[String] {
        &self.command_output
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific header was shown.
    pub fn has_header(&self, title: &str) -> bool {
        self.headers.iter().any(|h| h.contains(title))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_command_output() {
            self.command_output.push(output.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages() {
        let mut ui = MockUI::new();
        ui.message("Installing Demo");
        ui.success("Done");
        ui.warning("Careful");
        ui.error("Broken");
        ui.show_header("Header");

        assert_eq!(ui.messages(), ["Installing Demo"]);
        assert!(ui.has_success("Done"));
        assert!(ui.has_warning("Careful"));
        assert!(ui.has_error("Broken"));
        assert!(ui.has_header("Header"));
    }

    #[test]
    fn command_output_only_in_verbose() {
        let mut ui = MockUI::new();
        ui.command_output("quiet");
        assert!(ui.command_outputs().is_empty());

        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        ui.command_output("loud");
        assert_eq!(ui.command_outputs(), ["loud"]);
    }
}
