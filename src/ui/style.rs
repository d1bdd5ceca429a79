//! Consistent styling utilities for terminal output.
//!
//! Colors are dropped when `--no-color` or `NO_COLOR` is in effect.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

fn paint<T: Display>(text: T, styled: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        styled(&text)
    }
}

impl Style {
    /// Section headers (page title, "기록 이력")
    pub fn header<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.bold()))
    }

    /// Field labels
    pub fn label<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.dimmed()))
    }

    /// Field values and selections
    pub fn value<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.cyan()))
    }

    /// Secondary info and separators
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.dimmed()))
    }

    pub fn success<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.green()))
    }

    pub fn error<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.red().bold()))
    }

    pub fn warning<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.yellow()))
    }

    /// Slash commands (e.g., "/submit", "/export")
    pub fn command<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.green()))
    }

    /// Numbering and short codes
    pub fn code<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.yellow()))
    }

    /// Hints and help text
    pub fn hint<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.dimmed().italic()))
    }

    pub fn version<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.dimmed()))
    }
}
