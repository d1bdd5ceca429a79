//! # recordwise - Student Record Supplement Form
//!
//! `recordwise` collects a student's achievement standard, an observation of
//! the student's achievement, and the competencies the teacher observed,
//! then asks an OpenAI-compatible model to draft a supplemented record.
//! Every successful answer is kept in the session history, which can be
//! exported as `student_records.csv`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Put the API key next to your documents
//! echo 'OPENAI_API_KEY=sk-...' > ~/Documents/test.env
//!
//! # Open the form
//! recordwise
//!
//! # List the competency labels
//! recordwise competencies
//! ```
//!
//! Inside the form, `/standard`, `/observation` and `/competencies` fill the
//! fields, `/submit` sends them, and `/export` writes the history.

/// Interactive terminal form.
pub mod app;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Prompt construction and the chat completion client.
pub mod completion;

/// Credential file loading.
pub mod config;

/// CSV export of the session history.
pub mod export;

/// Form state machine and page rendering.
pub mod form;

/// File system utilities.
pub mod fs;

/// Tracing subscriber setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// Credential file location.
pub mod paths;

/// Session identifier and record history.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
