// ABOUTME: Lesson listing route for the nutrition education surface
// ABOUTME: Read-only endpoint over the lessons table
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lesson routes

use crate::resources::ServerResources;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use nutriscan_core::errors::AppResult;
use nutriscan_core::models::Lesson;
use std::sync::Arc;

/// Lesson routes implementation
pub struct LessonRoutes;

impl LessonRoutes {
    /// Create the lesson listing route
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/lessons", get(list_handler))
            .with_state(resources)
    }
}

async fn list_handler(
    State(resources): State<Arc<ServerResources>>,
) -> AppResult<Json<Vec<Lesson>>> {
    let lessons = resources.database.list_lessons().await?;
    Ok(Json(lessons))
}
