//! Subcommand implementations.

/// Interactive form command handler.
pub mod form;
