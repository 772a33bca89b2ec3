// ABOUTME: LLM provider abstraction for chat completions
// ABOUTME: Shared request/response types plus the provider trait route handlers depend on
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! LLM provider abstraction.
//!
//! One trait, one hosted implementation. The recipe service talks to
//! [`LlmProvider`] only, so tests substitute a scripted provider and the
//! degradation contract stays independent of any vendor API.

/// `OpenAI` chat completions client
pub mod openai;

use async_trait::async_trait;
use nutriscan_core::errors::AppResult;
use serde::{Deserialize, Serialize};

pub use openai::OpenAiProvider;

/// Role of a chat message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions
    System,
    /// End-user content
    User,
    /// Model output
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author role
    pub role: MessageRole,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Build a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// A chat completion request
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Conversation so far
    pub messages: Vec<ChatMessage>,
    /// Model override; `None` uses the provider default
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f64>,
}

/// A chat completion response
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Model output text
    pub content: String,
    /// Model that produced the response
    pub model: String,
    /// Token accounting when the provider reports it
    pub usage: Option<TokenUsage>,
}

/// Token usage accounting
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens billed
    pub total_tokens: u32,
}

/// Contract for hosted LLM backends
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Model used when a request does not name one
    fn default_model(&self) -> &str;

    /// Execute a chat completion
    ///
    /// # Errors
    ///
    /// Returns an external-service error on transport failures, non-success
    /// statuses, or unparseable responses
    async fn complete(&self, request: ChatRequest) -> AppResult<ChatResponse>;
}
