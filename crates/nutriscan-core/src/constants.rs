// ABOUTME: Application-wide constants for the NutriScan backend
// ABOUTME: Groups service identity, scoring bounds, and recipe suggestion limits by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application constants organized by domain

/// Service identity constants
pub mod service {
    /// Canonical service name used in logs and health responses
    pub const NAME: &str = "nutriscan-server";
}

/// Health score bounds and nutrient thresholds (per 100g)
pub mod scoring {
    /// Lowest possible health score
    pub const MIN_SCORE: u8 = 1;
    /// Highest possible health score
    pub const MAX_SCORE: u8 = 10;
    /// Caloric density above which the calorie penalty applies (kcal/100g)
    pub const KCAL_PENALTY_THRESHOLD: f64 = 400.0;
}

/// Recipe suggestion limits and fallback shape
pub mod recipes {
    /// Maximum number of ranked recipes returned to a caller
    pub const MAX_SUGGESTIONS: usize = 5;
    /// Name given to the single synthesized fallback recipe
    pub const FALLBACK_RECIPE_NAME: &str = "Chef Special";
    /// Maximum characters of model output kept as fallback instructions
    pub const FALLBACK_INSTRUCTIONS_CHARS: usize = 200;
}

/// Demo user seeded for pantry operations
pub mod demo_user {
    /// Fixed row id of the single demo user
    pub const ID: i64 = 1;
    /// Email of the demo user
    pub const EMAIL: &str = "demo@local";
    /// Display name of the demo user
    pub const NAME: &str = "Demo";
}
