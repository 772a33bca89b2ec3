// ABOUTME: Application services composing storage, providers, and domain logic
// ABOUTME: Currently hosts the recipe suggestion service
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application services

/// Recipe suggestion with LLM enhancement and deterministic fallback
pub mod recipes;

pub use recipes::RecipeSuggester;
