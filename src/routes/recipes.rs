// ABOUTME: Recipe suggestion route delegating to the recipe service
// ABOUTME: Always answers 200 with a JSON array per the degradation contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recipe suggestion route

use crate::resources::ServerResources;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create the recipe suggestion route
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes", post(suggest_handler))
            .with_state(resources)
    }
}

fn default_goal() -> String {
    "balanced".to_owned()
}

#[derive(Deserialize)]
struct RecipeRequest {
    #[serde(default)]
    pantry: Vec<String>,
    #[serde(default = "default_goal")]
    goal: String,
}

async fn suggest_handler(
    State(resources): State<Arc<ServerResources>>,
    Json(request): Json<RecipeRequest>,
) -> Json<Vec<Value>> {
    let recipes = resources
        .recipe_suggester
        .suggest(&request.pantry, &request.goal)
        .await;
    Json(recipes)
}
