// ABOUTME: Core types and constants for the NutriScan demo backend
// ABOUTME: Foundation crate with error handling, domain models, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # NutriScan Core
//!
//! Foundation crate providing shared types and constants for the NutriScan
//! demo backend. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Domain models (nutrient records, recipes, persistence rows)
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Domain data models (nutrient records, food products, recipes, rows)
pub mod models;

/// Application constants organized by domain
pub mod constants;

pub use errors::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use models::{
    Donation, FoodProduct, GeneratedRecipe, Lesson, NutrientRecord, PantryItem, RankedRecipe,
    Recipe,
};
