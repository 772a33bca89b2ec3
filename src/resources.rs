// ABOUTME: Shared server resources container injected into all route handlers
// ABOUTME: Holds the database pool, food data source, optional LLM and Stripe clients, and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared server resources.
//!
//! Everything route handlers need lives behind one `Arc<ServerResources>`
//! passed as axum state. Optional integrations stay `None` when their
//! credentials are absent; handlers degrade per their own contracts.

use crate::config::ServerConfig;
use crate::database::Database;
use crate::llm::LlmProvider;
use crate::payments::StripeClient;
use crate::services::RecipeSuggester;
use nutriscan_providers::FoodDataSource;
use std::sync::Arc;

/// Container for all shared server state
pub struct ServerResources {
    /// Database connection pool
    pub database: Arc<Database>,
    /// Food product lookup backend
    pub food_source: Arc<dyn FoodDataSource>,
    /// Recipe suggestion service (wraps the optional LLM provider)
    pub recipe_suggester: Arc<RecipeSuggester>,
    /// Stripe client; `None` when no secret key is configured
    pub stripe: Option<Arc<StripeClient>>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble the resource container
    #[must_use]
    pub fn new(
        database: Database,
        food_source: Arc<dyn FoodDataSource>,
        llm: Option<Arc<dyn LlmProvider>>,
        stripe: Option<StripeClient>,
        config: ServerConfig,
    ) -> Self {
        Self {
            database: Arc::new(database),
            food_source,
            recipe_suggester: Arc::new(RecipeSuggester::new(llm)),
            stripe: stripe.map(Arc::new),
            config: Arc::new(config),
        }
    }
}

impl std::fmt::Debug for ServerResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerResources")
            .field("stripe", &self.stripe.is_some())
            .finish_non_exhaustive()
    }
}
