use anyhow::Result;
use std::path::PathBuf;

use crate::app::FormApp;
use crate::completion::CompletionClient;
use crate::config::{API_KEY_VAR, Credentials};
use crate::form::FormController;
use crate::paths;
use crate::ui::Style;

pub struct FormOptions {
    pub env_file: Option<PathBuf>,
}

pub async fn run_form(options: FormOptions) -> Result<()> {
    let credentials = load_credentials(options.env_file)?;

    let client = CompletionClient::from_credentials(&credentials);
    let controller = FormController::new(client);
    let mut app = FormApp::new(controller);
    app.run().await
}

/// Loads credentials once for the process.
///
/// A missing key is reported but does not stop the form; the first
/// submission will fail with the service's authentication error instead.
fn load_credentials(env_file: Option<PathBuf>) -> Result<Credentials> {
    let path = match env_file {
        Some(path) => path,
        None => paths::credential_path()?,
    };

    let credentials = Credentials::load(&path);

    if credentials.source.is_none() {
        crate::warn!(
            "{} Credential file not found: {}",
            Style::warning("Warning:"),
            path.display()
        );
    }
    if !credentials.has_api_key() {
        crate::warn!(
            "{} {API_KEY_VAR} is not set; submissions will fail until it is added to {}\n",
            Style::warning("Warning:"),
            path.display()
        );
    }

    Ok(credentials)
}
