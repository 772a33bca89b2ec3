// ABOUTME: OpenAI chat completions client implementing the LlmProvider trait
// ABOUTME: Single-shot requests with a hard timeout and status-aware error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `OpenAI` chat completions client.
//!
//! Minimal client for the `/v1/chat/completions` endpoint. One attempt per
//! request with a hard timeout; retry policy belongs to the caller, and the
//! recipe path deliberately has none.

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use async_trait::async_trait;
use nutriscan_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model for recipe generation
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Hard timeout per completion request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(25);

/// `OpenAI` API client
pub struct OpenAiProvider {
    api_key: String,
    model: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl OpenAiProvider {
    /// Create a provider with an explicit key and model
    #[must_use]
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Override the API base URL (used by tests against a local stub)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        let detail = serde_json::from_str::<ApiErrorEnvelope>(body)
            .map_or_else(|_| body.to_owned(), |envelope| envelope.error.message);

        match status.as_u16() {
            401 | 403 => AppError::external_service(
                "OpenAI",
                format!("Authentication failed: {detail}"),
            ),
            429 => AppError::external_service("OpenAI", format!("Rate limited: {detail}")),
            _ => AppError::external_service("OpenAI", format!("HTTP {status}: {detail}")),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "OpenAI"
    }

    fn default_model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(model))]
    async fn complete(&self, request: ChatRequest) -> AppResult<ChatResponse> {
        let model = request.model.unwrap_or_else(|| self.model.clone());
        tracing::Span::current().record("model", model.as_str());

        let body = CompletionRequest {
            model: &model,
            messages: &request.messages,
            temperature: request.temperature,
        };

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::external_service("OpenAI", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::parse_error_response(status, &error_body));
        }

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            AppError::external_service("OpenAI", format!("JSON parse error: {e}"))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::external_service("OpenAI", "Response carried no choices")
            })?;

        debug!(
            tokens = completion.usage.as_ref().map(|u| u.total_tokens),
            "completion received"
        );

        Ok(ChatResponse {
            content,
            model: completion.model,
            usage: completion.usage,
        })
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    model: String,
    choices: Vec<Choice>,
    usage: Option<TokenUsage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}
