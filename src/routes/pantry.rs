// ABOUTME: Pantry CRUD routes for the single demo user
// ABOUTME: Add with trimming and defaults, list in insertion order, idempotent delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pantry routes.
//!
//! The demo deployment has exactly one user; the demo user row is created
//! lazily on the first pantry write so a fresh database needs no seeding
//! step.

use crate::resources::ServerResources;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use nutriscan_core::constants::demo_user;
use nutriscan_core::errors::AppResult;
use nutriscan_core::models::PantryItem;
use serde::Deserialize;
use std::sync::Arc;

/// Pantry routes implementation
pub struct PantryRoutes;

impl PantryRoutes {
    /// Create all pantry routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/pantry", post(add_handler))
            .route("/api/pantry", get(list_handler))
            .route("/api/pantry/:id", delete(delete_handler))
            .with_state(resources)
    }
}

#[derive(Deserialize)]
struct AddPantryRequest {
    #[serde(default)]
    name: String,
    quantity: Option<f64>,
}

async fn add_handler(
    State(resources): State<Arc<ServerResources>>,
    Json(request): Json<AddPantryRequest>,
) -> AppResult<impl IntoResponse> {
    let name = request.name.trim().to_owned();
    let quantity = request.quantity.unwrap_or(1.0);

    resources.database.ensure_demo_user().await?;
    let item = resources
        .database
        .add_pantry_item(demo_user::ID, &name, quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

async fn list_handler(
    State(resources): State<Arc<ServerResources>>,
) -> AppResult<Json<Vec<PantryItem>>> {
    let items = resources.database.list_pantry_items(demo_user::ID).await?;
    Ok(Json(items))
}

/// Delete answers 204 whether or not the id existed
async fn delete_handler(
    State(resources): State<Arc<ServerResources>>,
    Path(item_id): Path<i64>,
) -> AppResult<StatusCode> {
    resources
        .database
        .delete_pantry_item(demo_user::ID, item_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
