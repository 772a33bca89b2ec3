// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging init, database setup, and server resource builders
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Shared test utilities for `nutriscan_server` integration tests

use anyhow::Result;
use nutriscan_providers::{FoodDataSource, MockFoodSource};
use nutriscan_server::{
    config::ServerConfig, database::Database, llm::LlmProvider, resources::ServerResources,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup (in-memory, migrated)
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;
    database.migrate().await?;
    Ok(database)
}

/// Test config: default ports and URLs, no external integrations
pub fn test_config() -> ServerConfig {
    ServerConfig {
        port: 0,
        database_url: "sqlite::memory:".to_owned(),
        openai: None,
        stripe: None,
        cors_allowed_origins: Vec::new(),
    }
}

/// Standard server resources backed by the mock food source, no LLM or Stripe
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    create_test_resources_with_llm(None).await
}

/// Server resources with a caller-supplied LLM provider
pub async fn create_test_resources_with_llm(
    llm: Option<Arc<dyn LlmProvider>>,
) -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    let food_source: Arc<dyn FoodDataSource> = Arc::new(MockFoodSource::new());

    Ok(Arc::new(ServerResources::new(
        database,
        food_source,
        llm,
        None,
        test_config(),
    )))
}
