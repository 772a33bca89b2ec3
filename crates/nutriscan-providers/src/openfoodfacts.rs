// ABOUTME: Open Food Facts API client for product lookup and free-text search
// ABOUTME: Implements barcode lookup, search, response caching, rate limiting, and a mock client
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Open Food Facts API Client
//!
//! Client for the Open Food Facts database, a free and open product database
//! requiring no authentication. Lookups are cached in memory and paced with a
//! minimum inter-request interval to stay polite toward the public API.
//!
//! # API Reference
//! Open Food Facts API: <https://openfoodfacts.github.io/openfoodfacts-server/api/>
//!
//! # Example
//! ```rust,no_run
//! use nutriscan_providers::{FoodDataSource, OpenFoodFactsClient, OpenFoodFactsConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenFoodFactsClient::new(OpenFoodFactsConfig::default());
//! let product = client.product_by_barcode("737628064502").await?;
//! # Ok(())
//! # }
//! ```

use crate::FoodDataSource;
use async_trait::async_trait;
use nutriscan_core::errors::{AppError, AppResult};
use nutriscan_core::models::FoodProduct;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, instrument};

/// Open Food Facts client configuration
#[derive(Debug, Clone)]
pub struct OpenFoodFactsConfig {
    /// Base URL (default: <https://world.openfoodfacts.org>)
    pub base_url: String,
    /// User agent sent with every request (the API asks clients to identify)
    pub user_agent: String,
    /// Timeout for barcode lookups in seconds (default: 10)
    pub product_timeout_secs: u64,
    /// Timeout for free-text searches in seconds (default: 6)
    pub search_timeout_secs: u64,
    /// Cache TTL in seconds (default: 600)
    pub cache_ttl_secs: u64,
    /// Minimum interval between outbound requests in milliseconds
    pub min_request_interval_ms: u64,
}

impl Default for OpenFoodFactsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://world.openfoodfacts.org".to_owned(),
            user_agent: "NutriScan Hackathon App".to_owned(),
            product_timeout_secs: 10,
            search_timeout_secs: 6,
            cache_ttl_secs: 600,
            min_request_interval_ms: 100,
        }
    }
}

/// Product lookup response envelope
#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    product: Option<FoodProduct>,
}

/// Search response envelope
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<Value>,
}

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

/// Drop expired entries so distinct keys do not accumulate for the
/// process lifetime; called on every cache write
fn prune_expired<T>(cache: &mut HashMap<String, CacheEntry<T>>) {
    let now = Instant::now();
    cache.retain(|_, entry| now < entry.expires_at);
}

/// Paces outbound requests with a minimum inter-request interval
#[derive(Debug)]
struct RequestPacer {
    last_request: Option<Instant>,
    min_interval: Duration,
}

impl RequestPacer {
    const fn new(min_interval: Duration) -> Self {
        Self {
            last_request: None,
            min_interval,
        }
    }

    /// Sleep until the minimum interval since the previous request has
    /// elapsed, then record this request
    async fn pace(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}

/// Open Food Facts API client
pub struct OpenFoodFactsClient {
    config: OpenFoodFactsConfig,
    http_client: reqwest::Client,
    product_cache: Arc<RwLock<HashMap<String, CacheEntry<Option<FoodProduct>>>>>,
    search_cache: Arc<RwLock<HashMap<String, CacheEntry<Vec<Value>>>>>,
    pacer: Arc<Mutex<RequestPacer>>,
}

impl OpenFoodFactsClient {
    /// Create a new client
    #[must_use]
    pub fn new(config: OpenFoodFactsConfig) -> Self {
        let pacer = RequestPacer::new(Duration::from_millis(config.min_request_interval_ms));

        Self {
            config,
            http_client: reqwest::Client::new(),
            product_cache: Arc::new(RwLock::new(HashMap::new())),
            search_cache: Arc::new(RwLock::new(HashMap::new())),
            pacer: Arc::new(Mutex::new(pacer)),
        }
    }

    fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.config.cache_ttl_secs)
    }

    /// Clear all caches (useful for testing)
    pub async fn clear_caches(&self) {
        self.product_cache.write().await.clear();
        self.search_cache.write().await.clear();
    }

    /// Get cache sizes (useful for monitoring)
    pub async fn cache_stats(&self) -> (usize, usize) {
        let products = self.product_cache.read().await.len();
        let searches = self.search_cache.read().await.len();
        (products, searches)
    }

    #[instrument(skip(self))]
    async fn fetch_product(&self, barcode: &str) -> AppResult<Option<FoodProduct>> {
        self.pacer.lock().await.pace().await;

        let url = format!("{}/api/v2/product/{barcode}.json", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .header("User-Agent", &self.config.user_agent)
            .timeout(Duration::from_secs(self.config.product_timeout_secs))
            .send()
            .await
            .map_err(|e| AppError::external_service("Open Food Facts", e.to_string()))?;

        // The API answers 404 with a JSON body for unknown barcodes; treat
        // any non-success status as "no product" rather than an error
        if !response.status().is_success() {
            debug!(barcode, status = %response.status(), "product lookup returned non-success");
            return Ok(None);
        }

        let product_response: ProductResponse = response.json().await.map_err(|e| {
            AppError::external_service("Open Food Facts", format!("JSON parse error: {e}"))
        })?;

        Ok(product_response.product)
    }

    #[instrument(skip(self))]
    async fn fetch_search(&self, query: &str, page_size: Option<u32>) -> AppResult<Vec<Value>> {
        self.pacer.lock().await.pace().await;

        let url = format!("{}/cgi/search.pl", self.config.base_url);
        let mut params = vec![
            ("search_terms", query.to_owned()),
            ("search_simple", "1".to_owned()),
            ("action", "process".to_owned()),
            ("json", "1".to_owned()),
        ];
        if let Some(size) = page_size {
            params.push(("page_size", size.to_string()));
        }

        let response = self
            .http_client
            .get(&url)
            .query(&params)
            .header("User-Agent", &self.config.user_agent)
            .timeout(Duration::from_secs(self.config.search_timeout_secs))
            .send()
            .await
            .map_err(|e| AppError::external_service("Open Food Facts", e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                "Open Food Facts",
                format!("HTTP {}", response.status()),
            ));
        }

        let search_response: SearchResponse = response.json().await.map_err(|e| {
            AppError::external_service("Open Food Facts", format!("JSON parse error: {e}"))
        })?;

        Ok(search_response.products)
    }
}

#[async_trait]
impl FoodDataSource for OpenFoodFactsClient {
    async fn product_by_barcode(&self, barcode: &str) -> AppResult<Option<FoodProduct>> {
        if barcode.is_empty() {
            return Err(AppError::invalid_input("Barcode cannot be empty"));
        }

        {
            let cache = self.product_cache.read().await;
            if let Some(entry) = cache.get(barcode) {
                if Instant::now() < entry.expires_at {
                    return Ok(entry.data.clone());
                }
            }
        }

        let product = self.fetch_product(barcode).await?;

        {
            let mut cache = self.product_cache.write().await;
            prune_expired(&mut cache);
            cache.insert(
                barcode.to_owned(),
                CacheEntry {
                    data: product.clone(),
                    expires_at: Instant::now() + self.cache_ttl(),
                },
            );
        }

        Ok(product)
    }

    async fn search_products(
        &self,
        query: &str,
        page_size: Option<u32>,
    ) -> AppResult<Vec<Value>> {
        if query.is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        let cache_key = format!("{query}:{}", page_size.unwrap_or(0));
        {
            let cache = self.search_cache.read().await;
            if let Some(entry) = cache.get(&cache_key) {
                if Instant::now() < entry.expires_at {
                    return Ok(entry.data.clone());
                }
            }
        }

        let products = self.fetch_search(query, page_size).await?;

        {
            let mut cache = self.search_cache.write().await;
            prune_expired(&mut cache);
            cache.insert(
                cache_key,
                CacheEntry {
                    data: products.clone(),
                    expires_at: Instant::now() + self.cache_ttl(),
                },
            );
        }

        Ok(products)
    }
}

/// Mock food source for tests and offline demos (no network calls)
pub struct MockFoodSource {
    products: HashMap<String, Value>,
}

impl MockFoodSource {
    /// Create a mock source with predefined test data
    #[must_use]
    pub fn new() -> Self {
        let mut products = HashMap::new();

        products.insert(
            "3017620422003".to_owned(),
            serde_json::json!({
                "product_name": "Hazelnut Spread",
                "brands": "Generic",
                "nutriments": {
                    "energy-kcal_100g": 539.0,
                    "sugars_100g": 56.3,
                    "fiber_100g": 3.4,
                    "proteins_100g": 6.3
                }
            }),
        );

        products.insert(
            "0000000000017".to_owned(),
            serde_json::json!({
                "product_name": "Rolled Oats",
                "brands": "Generic",
                "nutriments": {
                    "energy-kcal_100g": 379.0,
                    "sugars_100g": 1.1,
                    "fiber_100g": 10.1,
                    "proteins_100g": 13.2
                }
            }),
        );

        Self { products }
    }

    /// Add or replace a mock product under a barcode
    pub fn insert(&mut self, barcode: impl Into<String>, product: Value) {
        self.products.insert(barcode.into(), product);
    }
}

impl Default for MockFoodSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FoodDataSource for MockFoodSource {
    async fn product_by_barcode(&self, barcode: &str) -> AppResult<Option<FoodProduct>> {
        if barcode.is_empty() {
            return Err(AppError::invalid_input("Barcode cannot be empty"));
        }

        self.products
            .get(barcode)
            .map(|raw| {
                serde_json::from_value(raw.clone()).map_err(|e| {
                    AppError::external_service("mock", format!("bad fixture: {e}"))
                })
            })
            .transpose()
    }

    async fn search_products(
        &self,
        query: &str,
        page_size: Option<u32>,
    ) -> AppResult<Vec<Value>> {
        if query.is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        let query_lower = query.to_lowercase();
        let mut matches: Vec<Value> = self
            .products
            .values()
            .filter(|p| {
                p.get("product_name")
                    .and_then(Value::as_str)
                    .is_some_and(|name| name.to_lowercase().contains(&query_lower))
            })
            .cloned()
            .collect();

        if let Some(size) = page_size {
            matches.truncate(size as usize);
        }

        Ok(matches)
    }
}
