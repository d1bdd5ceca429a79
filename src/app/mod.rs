//! Interactive terminal form.
//!
//! A prompt loop with slash commands for editing the form fields,
//! submitting, and exporting the session history.

/// Slash command parsing and autocomplete.
pub mod command;
mod repl;
mod ui;

pub use repl::FormApp;
