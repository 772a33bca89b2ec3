// ABOUTME: Environment-based server configuration with validation and safe logging summaries
// ABOUTME: Covers HTTP binding, database URL, LLM credentials, and the Stripe checkout flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server configuration loaded from environment variables.
//!
//! All knobs come from the environment (optionally seeded from a `.env`
//! file by the binary). Secrets are held as plain strings but never appear
//! in [`ServerConfig::summary`] output.

use nutriscan_core::errors::{AppError, AppResult};
use std::env;
use url::Url;

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port to bind (default: 5000)
    pub port: u16,
    /// `SQLite` connection URL (default: `sqlite:nutriscan.db`)
    pub database_url: String,
    /// `OpenAI` credentials; `None` disables LLM-enhanced recipes
    pub openai: Option<OpenAiConfig>,
    /// Stripe checkout configuration; `None` disables checkout sessions
    pub stripe: Option<StripeConfig>,
    /// Allowed CORS origins; empty means permissive (any origin)
    pub cors_allowed_origins: Vec<String>,
}

/// `OpenAI` API configuration
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key
    pub api_key: String,
    /// Model identifier (default: gpt-4o-mini)
    pub model: String,
}

/// Stripe checkout configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key
    pub secret_key: String,
    /// URL the customer lands on after paying
    pub success_url: String,
    /// URL the customer lands on after cancelling
    pub cancel_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config error when a variable is present but unparseable
    /// (for example a non-numeric `PORT`) or fails validation
    pub fn from_env() -> AppResult<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("Invalid PORT value '{raw}': {e}")))?,
            Err(_) => 5000,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:nutriscan.db".to_owned());

        // The presence of the key is the feature switch for the LLM path
        let openai = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| OpenAiConfig {
                api_key,
                model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_owned()),
            });

        let stripe = env::var("STRIPE_SECRET_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|secret_key| StripeConfig {
                secret_key,
                success_url: env::var("CHECKOUT_SUCCESS_URL")
                    .unwrap_or_else(|_| "http://127.0.0.1:5000/success".to_owned()),
                cancel_url: env::var("CHECKOUT_CANCEL_URL")
                    .unwrap_or_else(|_| "http://127.0.0.1:5000/cancel".to_owned()),
            });

        // Comma-separated origin list; unset or blank means any origin
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        let config = Self {
            port,
            database_url,
            openai,
            stripe,
            cors_allowed_origins,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns a config error when the database URL has an unsupported
    /// scheme or a checkout URL does not parse
    pub fn validate(&self) -> AppResult<()> {
        if !self.database_url.starts_with("sqlite:") {
            return Err(AppError::config(format!(
                "Unsupported DATABASE_URL '{}': only sqlite: URLs are supported",
                self.database_url
            )));
        }

        if let Some(stripe) = &self.stripe {
            for (name, value) in [
                ("CHECKOUT_SUCCESS_URL", &stripe.success_url),
                ("CHECKOUT_CANCEL_URL", &stripe.cancel_url),
            ] {
                Url::parse(value)
                    .map_err(|e| AppError::config(format!("Invalid {name} '{value}': {e}")))?;
            }
        }

        for origin in &self.cors_allowed_origins {
            Url::parse(origin).map_err(|e| {
                AppError::config(format!("Invalid CORS_ALLOWED_ORIGINS entry '{origin}': {e}"))
            })?;
        }

        Ok(())
    }

    /// Human-readable summary for startup logs. Never includes secrets.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} database={} llm={} stripe={} cors={}",
            self.port,
            self.database_url,
            self.openai
                .as_ref()
                .map_or("disabled", |c| c.model.as_str()),
            if self.stripe.is_some() {
                "enabled"
            } else {
                "disabled"
            },
            if self.cors_allowed_origins.is_empty() {
                "any".to_owned()
            } else {
                self.cors_allowed_origins.len().to_string()
            }
        )
    }
}
