// ABOUTME: NutriScan demo backend library crate wiring config, storage, providers, and routes
// ABOUTME: Exposes the HTTP server assembly plus the modules the binary and tests build on
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # NutriScan Server
//!
//! Demo nutrition-tracking backend. Looks up food products in Open Food
//! Facts, scores them with a transparent heuristic, manages a pantry, and
//! suggests recipes either from a builtin catalog or through an LLM with a
//! deterministic fallback.
//!
//! The crate is a thin HTTP shell: domain logic lives in
//! `nutriscan-intelligence`, external clients in `nutriscan-providers`, and
//! shared types in `nutriscan-core`.

/// Server configuration loaded from environment variables
pub mod config;

/// SQLite persistence for users, pantry items, donations, and lessons
pub mod database;

/// LLM provider abstraction and the `OpenAI` chat completions client
pub mod llm;

/// Structured logging configuration
pub mod logging;

/// Stripe Checkout client for the donation flow
pub mod payments;

/// Shared server resources injected into route handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Application services composing storage, providers, and intelligence
pub mod services;

/// Router assembly and server lifecycle
pub mod server;

pub use config::ServerConfig;
pub use resources::ServerResources;
pub use server::NutriScanServer;
