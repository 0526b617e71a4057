//! Terminal output for the `paramchain` command.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing data to stdout and status to stderr
//! - [`MockUI`] capturing output in tests
//!
//! # Example
//!
//! ```
//! use paramchain::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("us-east-1");
//! ui.error("Unknown parameter");
//!
//! assert!(ui.has_message("us-east-1"));
//! assert!(ui.has_error("Unknown parameter"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ParamTheme};

/// Trait for user interface interactions.
///
/// `message` carries command results and is always shown; the status
/// methods respect the [`OutputMode`].
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display command output (resolved values, listings).
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
