//! Inference client for the policy analysis request.
//!
//! Speaks the OpenAI-compatible `/v1/chat/completions` API (Groq in
//! production). One request per analysis, fixed decoding parameters,
//! no retries - a failure propagates to the caller as-is.

use async_trait::async_trait;
use billscope_common::util::truncate_with_ellipsis;
use billscope_common::{Config, Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Cap on provider error bodies quoted back to the user.
const MAX_API_ERROR_CHARS: usize = 200;

/// Interface to the inference service.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider name (e.g. "groq").
    fn name(&self) -> &str;

    /// Send one prompt and return the raw completion text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Groq-backed provider speaking the OpenAI-compatible chat API.
pub struct GroqProvider {
    model: String,
    temperature: f64,
    max_tokens: i64,
    base_url: String,
    api_key: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: i64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl GroqProvider {
    /// Create a provider from billscope configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key().to_string(),
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

#[async_trait]
impl Provider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!(
                "API error ({}): {}",
                status.as_u16(),
                truncate_with_ellipsis(&body, MAX_API_ERROR_CHARS)
            )));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Failed to parse response: {e}")))?;

        let choice = result
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Inference("No completion choices returned".to_string()))?;

        tracing::debug!(model = %self.model, "Completion received");
        Ok(choice.message.content)
    }
}
