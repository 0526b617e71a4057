//! Visual theme and styling.

use console::Style;

/// Styles for status messages.
#[derive(Debug, Clone)]
pub struct ParamTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for ParamTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled on stderr.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = ParamTheme::plain().format_success("Resolved");
        assert_eq!(msg, "✓ Resolved");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = ParamTheme::plain().format_warning("Shadowed");
        assert_eq!(msg, "⚠ Shadowed");
    }

    #[test]
    fn theme_formats_error() {
        let msg = ParamTheme::plain().format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = ParamTheme::default();
        let new = ParamTheme::new();
        assert_eq!(default.format_error("x"), new.format_error("x"));
    }
}
