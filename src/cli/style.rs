//! Console styling helpers
//!
//! Output goes through `anstream`, which strips the escape codes when the
//! stream isn't a terminal.

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark glyph
pub const CHECK: &str = "✓";
/// Cross glyph
pub const CROSS: &str = "✗";
/// Warning glyph
pub const WARN: &str = "⚠";

/// Semantic styles for console text
pub trait Stylize {
    /// Headings and key labels
    fn emphasis(&self) -> String;
    /// Paths and names the user should notice
    fn accent(&self) -> String;
    /// Secondary information
    fn muted(&self) -> String;
    /// Completed work
    fn success(&self) -> String;
    /// Recoverable problems
    fn warn(&self) -> String;
    /// Fatal problems
    fn error(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn success(&self) -> String {
        self.green().to_string()
    }

    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    fn error(&self) -> String {
        self.red().bold().to_string()
    }
}

/// Styled check mark
pub fn check() -> String {
    CHECK.success()
}

/// Styled cross
pub fn cross() -> String {
    CROSS.error()
}

/// Styled warning glyph
pub fn warning() -> String {
    WARN.warn()
}

/// Progress bar style for the merge loop
pub fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("=> "))
}
