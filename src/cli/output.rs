//! Styled terminal output for user-facing messages.
//!
//! Per-entry copy progress goes through the `log` facade; this manager only
//! prints the handful of lines a user always sees.

use console::style;

/// Colored terminal output sink.
#[derive(Debug, Default, Clone)]
pub struct OutputManager;

impl OutputManager {
    /// Creates a new output manager.
    pub fn new() -> Self {
        Self
    }

    /// Prints an informational message.
    pub fn info(&self, message: &str) {
        println!("{}", message);
    }

    /// Prints a success message.
    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green().bold(), message);
    }

    /// Prints a warning message to stderr.
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), message);
    }
}
