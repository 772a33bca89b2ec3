// ABOUTME: Stripe Checkout client for the fixed-amount donation flow
// ABOUTME: Creates hosted checkout sessions via the form-encoded Stripe REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stripe Checkout integration.
//!
//! One operation: create a hosted checkout session for a fixed $5 donation.
//! The Stripe REST API takes form-encoded bodies with bracketed array keys,
//! so the request is a flat key/value list rather than a serde struct.

use nutriscan_core::errors::{AppError, AppResult};
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

const STRIPE_API_URL: &str = "https://api.stripe.com/v1/checkout/sessions";

/// Donation amount in the currency's minor unit ($5.00)
const DONATION_AMOUNT_CENTS: &str = "500";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// A created checkout session
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    /// Stripe session id, passed to the frontend redirect
    pub id: String,
}

/// Stripe API client
pub struct StripeClient {
    secret_key: String,
    success_url: String,
    cancel_url: String,
    api_url: String,
    http_client: reqwest::Client,
}

impl StripeClient {
    /// Create a client with the given credentials and redirect URLs
    #[must_use]
    pub fn new(
        secret_key: impl Into<String>,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            secret_key: secret_key.into(),
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
            api_url: STRIPE_API_URL.to_owned(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Override the API URL (used by tests against a local stub)
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Create a checkout session for a single $5 donation
    ///
    /// # Errors
    ///
    /// Returns an external-service error on transport failures, non-success
    /// statuses, or unparseable responses
    #[instrument(skip(self))]
    pub async fn create_donation_session(&self) -> AppResult<CheckoutSession> {
        let params = [
            ("payment_method_types[0]", "card"),
            ("line_items[0][price_data][currency]", "usd"),
            (
                "line_items[0][price_data][product_data][name]",
                "NutriScan Donation",
            ),
            (
                "line_items[0][price_data][unit_amount]",
                DONATION_AMOUNT_CENTS,
            ),
            ("line_items[0][quantity]", "1"),
            ("mode", "payment"),
            ("success_url", self.success_url.as_str()),
            ("cancel_url", self.cancel_url.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(&self.secret_key)
            .timeout(REQUEST_TIMEOUT)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::external_service("Stripe", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(
                "Stripe",
                format!("HTTP {status}: {body}"),
            ));
        }

        response
            .json::<CheckoutSession>()
            .await
            .map_err(|e| AppError::external_service("Stripe", format!("JSON parse error: {e}")))
    }
}
