//! Plain UI for pipes, CI and headless environments.

use super::{OutputMode, UserInterface};

/// UI implementation writing unstyled lines.
///
/// Status goes to stdout; warnings and errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_command_output() {
            for line in output.lines() {
                println!("    {}", line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_mode_output_does_not_panic() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        ui.message("hidden");
        ui.success("hidden");
        ui.warning("hidden");
        ui.command_output("hidden\n");
        ui.error("shown");
    }
}
