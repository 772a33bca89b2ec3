// ABOUTME: External food-database clients for the NutriScan backend
// ABOUTME: Open Food Facts HTTP client, offline demo data, and a mock source for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # NutriScan Providers
//!
//! Clients for the external food databases NutriScan consumes. Today that is
//! Open Food Facts plus an offline demo dataset; the [`FoodDataSource`] trait
//! keeps route handlers independent of the concrete client so tests can
//! substitute the mock.

/// Open Food Facts API client with caching and rate limiting
pub mod openfoodfacts;

/// Offline demo products used when the live API fails
pub mod demo;

use async_trait::async_trait;
use nutriscan_core::errors::AppResult;
use nutriscan_core::models::FoodProduct;
use serde_json::Value;

pub use openfoodfacts::{MockFoodSource, OpenFoodFactsClient, OpenFoodFactsConfig};

/// Contract for food product lookup backends.
///
/// Search results are raw product objects so callers can pass them through
/// to clients unchanged; barcode lookups are parsed into [`FoodProduct`].
#[async_trait]
pub trait FoodDataSource: Send + Sync {
    /// Fetch a product by barcode. `Ok(None)` means the database has no
    /// product under that code.
    async fn product_by_barcode(&self, barcode: &str) -> AppResult<Option<FoodProduct>>;

    /// Free-text product search returning raw product JSON objects.
    ///
    /// `page_size` limits the result server-side when given.
    async fn search_products(&self, query: &str, page_size: Option<u32>)
        -> AppResult<Vec<Value>>;
}
