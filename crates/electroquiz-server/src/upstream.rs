//! Client for the hosted chat completion API.
//!
//! The upstream speaks the OpenAI chat completions protocol. Every request
//! carries a fixed system instruction ahead of the caller's history.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use electroquiz_core::ChatMessage;

use crate::config::UpstreamConfig;

/// Framing instruction prepended to every conversation.
pub const SYSTEM_INSTRUCTION: &str = concat!(
    "You are an AI assistant specialized in Electronics Engineering for BE students. ",
    "Provide accurate, educational responses about circuit theory, digital electronics, ",
    "analog electronics, microprocessors, power electronics, communication systems, ",
    "and other electronics topics. When appropriate, suggest relevant study resources ",
    "or quiz topics that would help the student learn more about the subject. ",
    "Keep explanations clear and concise, using technical terminology appropriately ",
    "for engineering students.",
);

/// Errors from the upstream chat completion API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Request could not be sent or the response could not be read.
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream API error: {status}")]
    Status { status: u16 },

    /// Response body was not a chat completion.
    #[error("malformed upstream response: {0}")]
    Decode(String),

    /// Response contained no completion.
    #[error("upstream response contained no choices")]
    EmptyChoices,
}

/// A hosted chat completion service.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Send the full message sequence and return the first completion's text.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, UpstreamError>;
}

/// Prepend the system instruction to the caller's history.
pub fn with_system_instruction(history: Vec<ChatMessage>) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(SYSTEM_INSTRUCTION));
    messages.extend(history);
    messages
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Groq (OpenAI-compatible) chat completion client.
pub struct GroqClient {
    inner: reqwest::Client,
    config: UpstreamConfig,
}

impl GroqClient {
    /// Create a new client.
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            inner: reqwest::Client::new(),
            config,
        }
    }

    fn api_key(&self) -> String {
        // Absence is not an error here; the upstream rejects the request.
        std::env::var(&self.config.api_key_var).unwrap_or_default()
    }
}

#[async_trait]
impl ChatCompletion for GroqClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, UpstreamError> {
        let body = CompletionRequest {
            model: &self.config.model,
            messages: &messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(
            url = %self.config.api_url,
            model = %self.config.model,
            messages = messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .inner
            .post(&self.config.api_url)
            .bearer_auth(self.api_key())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(status = %status, body = %detail, "Groq API error");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let completion: CompletionResponse =
            serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Decode(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(UpstreamError::EmptyChoices)?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
