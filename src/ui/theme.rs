//! Visual theme and styling.

use console::Style;

/// Boiler's visual theme.
#[derive(Debug, Clone)]
pub struct BoilerTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for echoed command output (dim).
    pub command: Style,
}

impl Default for BoilerTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl BoilerTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            header: Style::new().bold().cyan(),
            command: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            command: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Indent and dim each line of captured command output.
    pub fn format_command_output(&self, output: &str) -> String {
        output
            .lines()
            .map(|line| format!("    {}", self.command.apply_to(line)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::colors_enabled() && console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = BoilerTheme::plain();
        let msg = theme.format_success("Directory successfully added");
        assert_eq!(msg, "✓ Directory successfully added");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = BoilerTheme::plain();
        let msg = theme.format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = BoilerTheme::plain();
        let msg = theme.format_error("No paths configured");
        assert!(msg.contains("✗"));
        assert!(msg.contains("No paths configured"));
    }

    #[test]
    fn theme_formats_header() {
        let theme = BoilerTheme::plain();
        assert_eq!(theme.format_header("Installing Demo"), "Installing Demo");
    }

    #[test]
    fn command_output_is_indented_per_line() {
        let theme = BoilerTheme::plain();
        assert_eq!(
            theme.format_command_output("one\ntwo\n"),
            "    one\n    two"
        );
    }

    #[test]
    fn default_impl_matches_new() {
        let default = BoilerTheme::default();
        let new = BoilerTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
