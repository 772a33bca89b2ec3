// ABOUTME: Builtin recipe catalog compiled into the binary
// ABOUTME: Three simple recipes used by the rule-based ranker and the fallback path
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The builtin recipe catalog.
//!
//! A small, read-only set of low-cost recipes that works offline. Required
//! ingredient names are lowercase; matching against a pantry is literal after
//! lowercasing (no pluralization or whitespace normalization).

use nutriscan_core::models::Recipe;

/// Build the static recipe catalog
#[must_use]
pub fn builtin_catalog() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Banana Oatmeal",
            &["banana", "oats"],
            "Cook oats in water or milk. Slice banana on top. Optional: cinnamon.",
        ),
        Recipe::new(
            "Veggie Stir Fry",
            &["onion", "tomato", "carrot"],
            "Stir-fry chopped veggies with oil, add salt/pepper. Serve with rice.",
        ),
        Recipe::new(
            "Egg Fried Rice",
            &["rice", "egg"],
            "Scramble egg, add cooked rice, soy/seasoning. Mix well.",
        ),
    ]
}
