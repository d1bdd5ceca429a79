use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key holding the completion-service API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Optional key overriding the completion-service base URL, including `/v1`.
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Endpoint used when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Credentials resolved once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The API key, if one was found.
    pub api_key: Option<String>,
    /// The base URL of the OpenAI-compatible endpoint.
    pub endpoint: String,
    /// The credential file the entries were read from, if it could be read.
    pub source: Option<PathBuf>,
}

impl Credentials {
    /// Loads credentials from the dotenv file at `path`.
    ///
    /// Never fails: a missing or malformed file is logged and treated as empty,
    /// so a missing key only surfaces when the first request is rejected.
    /// Process environment variables take precedence over file entries.
    pub fn load(path: &Path) -> Self {
        let (entries, source) = match read_env_file(path) {
            Ok(entries) => {
                tracing::debug!(path = %path.display(), entries = entries.len(), "loaded credential file");
                (entries, Some(path.to_path_buf()))
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "credential file not loaded: {e:#}");
                (HashMap::new(), None)
            }
        };

        let mut credentials = Self::from_entries(&entries, |key| std::env::var(key).ok());
        credentials.source = source;

        if credentials.api_key.is_none() {
            tracing::warn!("{API_KEY_VAR} is not set; requests will be sent without credentials");
        }

        credentials
    }

    /// Resolves credentials from file entries and an environment lookup.
    ///
    /// A non-empty environment value wins over the file entry of the same name.
    pub fn from_entries<F>(entries: &HashMap<String, String>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| {
            env(key)
                .filter(|v| !v.is_empty())
                .or_else(|| entries.get(key).filter(|v| !v.is_empty()).cloned())
        };

        Self {
            api_key: lookup(API_KEY_VAR),
            endpoint: lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            source: None,
        }
    }

    /// Returns `true` if an API key was resolved.
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Reads all key/value entries of a dotenv file without touching the
/// process environment.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let iter = dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to open credential file: {}", path.display()))?;

    let mut entries = HashMap::new();
    for item in iter {
        let (key, value) =
            item.with_context(|| format!("Failed to parse credential file: {}", path.display()))?;
        entries.insert(key, value);
    }
    Ok(entries)
}
