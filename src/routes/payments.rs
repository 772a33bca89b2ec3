// ABOUTME: Checkout route creating Stripe sessions for the fixed donation
// ABOUTME: Missing payment config and Stripe failures both answer 403
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Checkout route.
//!
//! The demo treats an unconfigured Stripe key the same as a declined call:
//! both answer 403 with an error body so the frontend shows one message.

use crate::resources::ServerResources;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Payment routes implementation
pub struct PaymentRoutes;

impl PaymentRoutes {
    /// Create the checkout session route
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/create-checkout-session", post(checkout_handler))
            .with_state(resources)
    }
}

async fn checkout_handler(
    State(resources): State<Arc<ServerResources>>,
) -> impl IntoResponse {
    let Some(stripe) = &resources.stripe else {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"error": "Payments are not configured"})),
        );
    };

    match stripe.create_donation_session().await {
        Ok(session) => (StatusCode::OK, Json(json!({"id": session.id}))),
        Err(e) => {
            warn!(error = %e, "checkout session creation failed");
            (StatusCode::FORBIDDEN, Json(json!({"error": e.message})))
        }
    }
}
