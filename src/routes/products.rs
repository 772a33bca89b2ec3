// ABOUTME: Product lookup routes backed by the food data source
// ABOUTME: Barcode scan with health score, first-match food search, and demo-safe search
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Barcode scan and product search routes.
//!
//! `/search` (and its `/api`-prefixed alias for the frontend) must keep
//! working during offline demos, so transport failures and empty live
//! results fall back to builtin demo products instead of surfacing errors.

use crate::resources::ServerResources;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use nutriscan_core::models::FoodProduct;
use nutriscan_intelligence::health_score;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Product routes implementation
pub struct ProductRoutes;

impl ProductRoutes {
    /// Create all product lookup routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/scan/:barcode", get(scan_handler))
            .route("/api/food", get(food_handler))
            .route("/search", get(search_handler))
            .route("/api/search", get(search_handler))
            .with_state(resources)
    }
}

#[derive(Deserialize)]
struct FoodQuery {
    #[serde(default)]
    q: String,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    query: String,
}

/// Look up a product by barcode and attach its health score.
///
/// An unknown barcode still answers `ok` with defaulted fields; only a
/// lookup failure produces an error status.
async fn scan_handler(
    State(resources): State<Arc<ServerResources>>,
    Path(barcode): Path<String>,
) -> impl IntoResponse {
    match resources.food_source.product_by_barcode(&barcode).await {
        Ok(product) => {
            let product = product.unwrap_or_default();
            let score = health_score(&product.nutriments);
            (
                StatusCode::OK,
                Json(json!({
                    "status": "ok",
                    "name": product.product_name.unwrap_or_else(|| "Unknown".to_owned()),
                    "brand": product.brands.unwrap_or_default(),
                    "nutriments": product.nutriments,
                    "health_score": score
                })),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "error", "message": e.message})),
        ),
    }
}

/// Search by name and score the first match
async fn food_handler(
    State(resources): State<Arc<ServerResources>>,
    Query(params): Query<FoodQuery>,
) -> impl IntoResponse {
    match resources.food_source.search_products(&params.q, Some(1)).await {
        Ok(products) => products.into_iter().next().map_or_else(
            || (StatusCode::OK, Json(json!({"status": "not_found"}))),
            |raw| {
                let product: FoodProduct = serde_json::from_value(raw).unwrap_or_default();
                let score = health_score(&product.nutriments);
                (
                    StatusCode::OK,
                    Json(json!({
                        "status": "ok",
                        "name": product.product_name.unwrap_or_else(|| "Unknown".to_owned()),
                        "nutriments": product.nutriments,
                        "health_score": score
                    })),
                )
            },
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "error", "message": e.message})),
        ),
    }
}

/// Free-text search with builtin demo fallback.
///
/// Lowercases the query, tries the live source, and serves demo products
/// when the source fails or returns nothing. Up to 5 raw product objects.
async fn search_handler(
    State(resources): State<Arc<ServerResources>>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    let query = params.query.to_lowercase();
    if query.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing query"})),
        );
    }

    let products = match resources.food_source.search_products(&query, None).await {
        Ok(products) if !products.is_empty() => {
            let mut products = products;
            products.truncate(5);
            products
        }
        Ok(_) => nutriscan_providers::demo::demo_products(&query),
        Err(e) => {
            warn!(query, error = %e, "live search failed, serving demo products");
            nutriscan_providers::demo::demo_products(&query)
        }
    };

    (StatusCode::OK, Json(json!(products)))
}
