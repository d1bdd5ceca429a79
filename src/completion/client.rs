use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

use super::prompt::Prompt;
use crate::config::Credentials;

/// Model identifier sent with every request.
pub const MODEL: &str = "gpt-4-0125-preview";

/// Generation-length cap.
pub const MAX_TOKENS: u32 = 1000;

/// Sampling temperature.
pub const TEMPERATURE: f32 = 0.7;

/// Failure of a single completion call.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("failed to connect to API endpoint {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API response contained no generated text")]
    EmptyResponse,
}

/// A service that turns a prompt into generated text.
pub trait Completer {
    fn complete(
        &self,
        prompt: &Prompt,
    ) -> impl Future<Output = Result<String, CompletionError>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completion endpoint.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CompletionClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self::new(credentials.endpoint.clone(), credentials.api_key.clone())
    }

    fn url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }

    async fn send(&self, prompt: &Prompt) -> Result<String, CompletionError> {
        let url = self.url();

        let chat_request = ChatCompletionRequest {
            model: MODEL,
            messages: [
                Message {
                    role: "system",
                    content: &prompt.system,
                },
                Message {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        tracing::debug!(
            model = MODEL,
            prompt_chars = prompt.user.chars().count(),
            "sending completion request"
        );

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .map_err(|source| CompletionError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| CompletionError::Transport { url, source })?;

        if !status.is_success() {
            return Err(CompletionError::Status { status, body });
        }

        extract_content(&body)
    }
}

impl Completer for CompletionClient {
    async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError> {
        let result = self.send(prompt).await;
        if let Err(e) = &result {
            tracing::warn!("completion request failed: {e}");
        }
        result
    }
}

/// Extracts the trimmed text of the first choice from a response body.
pub fn extract_content(body: &str) -> Result<String, CompletionError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or(CompletionError::EmptyResponse)?;

    Ok(content)
}
