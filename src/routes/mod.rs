// ABOUTME: HTTP route handler modules for the NutriScan API surface
// ABOUTME: Each module owns one resource and exposes a routes() constructor taking shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP route handlers.
//!
//! Every module follows the same shape: a unit struct with a `routes()`
//! constructor returning an `axum::Router` wired to shared
//! [`crate::ServerResources`] state. [`crate::server`] merges them.

/// Donation recording and listing
pub mod donations;

/// Liveness endpoint
pub mod health;

/// Lesson listing
pub mod lessons;

/// Pantry CRUD for the demo user
pub mod pantry;

/// Stripe checkout session creation
pub mod payments;

/// Barcode scan and product search
pub mod products;

/// Recipe suggestions
pub mod recipes;
