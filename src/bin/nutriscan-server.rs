// ABOUTME: NutriScan server binary entrypoint
// ABOUTME: Loads environment config, initializes logging and storage, and serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! NutriScan server binary

use anyhow::Result;
use clap::Parser;
use nutriscan_providers::{FoodDataSource, OpenFoodFactsClient, OpenFoodFactsConfig};
use nutriscan_server::config::ServerConfig;
use nutriscan_server::database::Database;
use nutriscan_server::llm::{LlmProvider, OpenAiProvider};
use nutriscan_server::logging::LoggingConfig;
use nutriscan_server::payments::StripeClient;
use nutriscan_server::resources::ServerResources;
use nutriscan_server::server::NutriScanServer;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "nutriscan-server")]
#[command(about = "NutriScan demo nutrition-tracking backend")]
#[command(version)]
struct Args {
    /// Path to a .env file to load before reading the environment
    #[arg(long, default_value = ".env")]
    config: String,

    /// HTTP port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Database URL (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Log level (overrides LOG_LEVEL / RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Missing .env is fine; the environment may be set directly
    let _ = dotenvy::from_path(&args.config);

    let mut logging = LoggingConfig::from_env();
    if let Some(level) = args.log_level {
        logging.level = level;
    }
    logging.init()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
        config.validate()?;
    }

    info!(summary = %config.summary(), "configuration loaded");

    let database = Database::new(&config.database_url).await?;
    database.migrate().await?;
    database.ensure_demo_user().await?;

    let food_source: Arc<dyn FoodDataSource> =
        Arc::new(OpenFoodFactsClient::new(OpenFoodFactsConfig::default()));

    let llm: Option<Arc<dyn LlmProvider>> = config.openai.as_ref().map(|openai| {
        info!(model = %openai.model, "LLM-enhanced recipes enabled");
        Arc::new(OpenAiProvider::new(&openai.api_key, &openai.model)) as Arc<dyn LlmProvider>
    });
    if llm.is_none() {
        info!("no OPENAI_API_KEY set, recipes use catalog ranking only");
    }

    let stripe = config.stripe.as_ref().map(|stripe| {
        StripeClient::new(&stripe.secret_key, &stripe.success_url, &stripe.cancel_url)
    });

    let port = config.port;
    let resources = Arc::new(ServerResources::new(
        database,
        food_source,
        llm,
        stripe,
        config,
    ));

    info!(
        port,
        "endpoints: /api/health /api/scan/:barcode /api/food /search /api/pantry /api/recipes /api/donations /api/lessons /create-checkout-session"
    );

    NutriScanServer::new(resources).run().await?;
    Ok(())
}
