//! Chat-completions client for Markdown translation.
//!
//! Sync HTTP via `ureq` with connection pooling and a global timeout; the
//! request/response shapes follow the OpenAI chat-completions API.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use cursomatic_codeblock::{extract, restore};

use crate::error::TranslateError;

/// Default chat-completions endpoint.
const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model for translation requests.
const DEFAULT_MODEL: &str = "gpt-4";

/// Default HTTP timeout (translations of long documents are slow).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Sampling temperature; low, for faithful translation.
const TEMPERATURE: f64 = 0.4;

/// Explicit configuration for [`Translator`].
///
/// Built by the caller (typically the CLI, which resolves the API key from
/// its own arguments or environment); the library holds no ambient state.
#[derive(Debug, Clone)]
pub struct TranslateConfig {
    /// Chat-completions endpoint URL.
    pub api_url: String,
    /// Bearer token for the API.
    pub api_key: String,
    /// Model name sent with each request.
    pub model: String,
    /// Global HTTP timeout.
    pub timeout: Duration,
}

impl TranslateConfig {
    /// Create a config with the given API key and default endpoint, model,
    /// and timeout.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the chat-completions endpoint URL.
    #[must_use]
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the model name.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the global HTTP timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// English to Spanish Markdown translator.
pub struct Translator {
    agent: ureq::Agent,
    config: TranslateConfig,
}

impl Translator {
    /// Create a translator from an explicit config value.
    #[must_use]
    pub fn new(config: TranslateConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self { agent, config }
    }

    /// Translate a whole Markdown document.
    ///
    /// Fenced code blocks are swapped for placeholder tokens before the
    /// request and restored afterwards, so code content reaches the output
    /// byte for byte.
    pub fn translate_document(
        &self,
        text: &str,
        exclusions: &[String],
    ) -> Result<String, TranslateError> {
        let (masked, blocks) = extract(text);
        if !blocks.is_empty() {
            debug!("Shielded {} code block(s) from translation", blocks.len());
        }

        let translated = self.translate(&masked, exclusions)?;
        Ok(restore(&translated, &blocks))
    }

    /// Translate already-masked content via the chat-completions API.
    pub fn translate(
        &self,
        content: &str,
        exclusions: &[String],
    ) -> Result<String, TranslateError> {
        let payload = build_payload(&self.config.model, content, exclusions);
        let payload_bytes = serde_json::to_vec(&payload)?;

        info!(
            "Requesting translation from {} (model {})",
            self.config.api_url, self.config.model
        );

        let response = self
            .agent
            .post(&self.config.api_url)
            .header("Authorization", &format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(TranslateError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let parsed: ChatResponse = body_reader.read_json()?;
        first_choice(parsed)
    }
}

/// Build the chat-completions request payload.
fn build_payload(model: &str, content: &str, exclusions: &[String]) -> Value {
    let mut system_prompt = String::from(
        "You are a professional translator. \
         Translate the following Markdown content from English to Spanish. \
         Keep Markdown structure intact and leave placeholder tokens \
         enclosed in [[[ and ]]] exactly as they are.",
    );
    if !exclusions.is_empty() {
        system_prompt.push_str("\nDo not translate the following terms: ");
        system_prompt.push_str(&exclusions.join(", "));
        system_prompt.push('.');
    }

    json!({
        "model": model,
        "messages": [
            {"role": "system", "content": system_prompt},
            {"role": "user", "content": content},
        ],
        "temperature": TEMPERATURE,
    })
}

/// Pull the translated text out of a parsed response.
fn first_choice(response: ChatResponse) -> Result<String, TranslateError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(TranslateError::EmptyResponse)
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}
