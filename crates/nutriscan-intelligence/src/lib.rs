// ABOUTME: Heuristic engine for NutriScan: health scoring and recipe ranking
// ABOUTME: Pure synchronous functions with no I/O, safe to call concurrently
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # NutriScan Intelligence
//!
//! The pure heuristic core of the NutriScan backend: a 1-10 health score
//! computed from per-100g nutrient data, a rule-based recipe ranker over a
//! builtin catalog, and the structured-list extraction used by the
//! LLM-enhanced recipe path. Nothing in this crate performs I/O or holds
//! state; every function is total and safe to invoke concurrently.
//!
//! ## Modules
//!
//! - **scoring**: nutrient record to health score in \[1, 10\]
//! - **ranking**: pantry plus catalog to ranked recipe matches
//! - **catalog**: the builtin three-recipe catalog
//! - **extraction**: best-effort structured-list extraction from model output

/// Health score heuristic
pub mod scoring;

/// Rule-based recipe ranking
pub mod ranking;

/// Builtin recipe catalog
pub mod catalog;

/// Structured-list extraction and fallback-record composition
pub mod extraction;

pub use catalog::builtin_catalog;
pub use extraction::{fallback_recipe, BracketSpanExtractor, ExtractedList, ListExtractor};
pub use ranking::rank_recipes;
pub use scoring::health_score;
