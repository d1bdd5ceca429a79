//! Path utilities for the credential file.
//!
//! The credential file lives in the user's document directory, matching
//! where teachers already keep the `.env` file handed out with the tool.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// File name of the credential file inside the document directory.
pub const CREDENTIAL_FILE_NAME: &str = "test.env";

/// Returns the user's document directory.
///
/// Resolution order:
/// 1. The platform document directory (`XDG_DOCUMENTS_DIR`, `~/Documents`, ...)
/// 2. `~/Documents` when the platform does not report one
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn documents_dir() -> Result<PathBuf> {
    if let Some(dir) = dirs::document_dir() {
        return Ok(dir);
    }
    Ok(home_dir()?.join("Documents"))
}

/// Returns the fixed credential file path (`~/Documents/test.env`).
pub fn credential_path() -> Result<PathBuf> {
    Ok(documents_dir()?.join(CREDENTIAL_FILE_NAME))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
