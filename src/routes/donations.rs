// ABOUTME: Donation routes for the community sharing map
// ABOUTME: Record with permissive defaults, list with full fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Donation routes.
//!
//! Every field is optional on write; the demo frontend posts partial
//! records and the map tolerates placeholder coordinates.

use crate::resources::ServerResources;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use nutriscan_core::errors::AppResult;
use nutriscan_core::models::Donation;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Donation routes implementation
pub struct DonationRoutes;

impl DonationRoutes {
    /// Create all donation routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/donations", post(create_handler))
            .route("/api/donations", get(list_handler))
            .with_state(resources)
    }
}

fn default_user_name() -> String {
    "Anonymous".to_owned()
}

fn default_quantity() -> String {
    "1".to_owned()
}

#[derive(Deserialize)]
struct CreateDonationRequest {
    #[serde(default = "default_user_name")]
    user_name: String,
    #[serde(default)]
    item: String,
    #[serde(default = "default_quantity")]
    quantity: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lng: f64,
    #[serde(default)]
    note: String,
}

async fn create_handler(
    State(resources): State<Arc<ServerResources>>,
    Json(request): Json<CreateDonationRequest>,
) -> AppResult<impl IntoResponse> {
    let donation = Donation {
        id: 0,
        user_name: request.user_name,
        item: request.item,
        quantity: request.quantity,
        lat: request.lat,
        lng: request.lng,
        note: request.note,
    };

    let id = resources.database.insert_donation(&donation).await?;
    Ok((StatusCode::CREATED, Json(json!({"id": id}))))
}

async fn list_handler(
    State(resources): State<Arc<ServerResources>>,
) -> AppResult<Json<Vec<Donation>>> {
    let donations = resources.database.list_donations().await?;
    Ok(Json(donations))
}
