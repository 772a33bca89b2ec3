// ABOUTME: Router assembly and HTTP server lifecycle
// ABOUTME: Merges all route modules, applies CORS and tracing layers, runs with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Router assembly and server lifecycle

use crate::resources::ServerResources;
use crate::routes::donations::DonationRoutes;
use crate::routes::health::HealthRoutes;
use crate::routes::lessons::LessonRoutes;
use crate::routes::pantry::PantryRoutes;
use crate::routes::payments::PaymentRoutes;
use crate::routes::products::ProductRoutes;
use crate::routes::recipes::RecipeRoutes;
use axum::http::HeaderValue;
use axum::Router;
use nutriscan_core::errors::{AppError, AppResult};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// The assembled NutriScan HTTP server
pub struct NutriScanServer {
    resources: Arc<ServerResources>,
}

impl NutriScanServer {
    /// Create a server from assembled resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete router with middleware applied.
    ///
    /// CORS defaults to permissive: the demo frontend is served from a
    /// different origin and the API carries no credentials. Setting
    /// `CORS_ALLOWED_ORIGINS` restricts it to the listed origins.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(ProductRoutes::routes(self.resources.clone()))
            .merge(PantryRoutes::routes(self.resources.clone()))
            .merge(RecipeRoutes::routes(self.resources.clone()))
            .merge(DonationRoutes::routes(self.resources.clone()))
            .merge(LessonRoutes::routes(self.resources.clone()))
            .merge(PaymentRoutes::routes(self.resources.clone()))
            .layer(self.cors_layer())
            .layer(TraceLayer::new_for_http())
    }

    fn cors_layer(&self) -> CorsLayer {
        let configured = &self.resources.config.cors_allowed_origins;
        if configured.is_empty() {
            return CorsLayer::permissive();
        }

        let origins: Vec<HeaderValue> = configured
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(origin = %origin, error = %e, "skipping unusable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Bind the configured port and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an internal error when binding or serving fails
    pub async fn run(&self) -> AppResult<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.resources.config.port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        info!(%addr, "server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
    } else {
        info!("shutdown signal received");
    }
}
