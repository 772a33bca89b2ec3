// ABOUTME: Rule-based recipe ranking over a static catalog
// ABOUTME: Deterministic pantry matching with stable ordering and a fixed result cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-based recipe ranking.
//!
//! Matches a caller's pantry against a recipe catalog and returns the best
//! candidates by match ratio (matched required ingredients over total
//! required ingredients). Recipes with no matched ingredient are excluded,
//! ties keep catalog order (the sort is stable), and at most
//! [`MAX_SUGGESTIONS`](nutriscan_core::constants::recipes::MAX_SUGGESTIONS)
//! entries are returned.

use nutriscan_core::constants::recipes::MAX_SUGGESTIONS;
use nutriscan_core::models::{RankedRecipe, Recipe};
use std::collections::HashSet;

/// Rank catalog recipes against a pantry.
///
/// Pantry names are lowercased into a set (duplicates collapse); required
/// ingredient matching is literal after lowercasing, so "tomatoes" does not
/// match "tomato". An empty pantry yields an empty result.
#[must_use]
pub fn rank_recipes(pantry: &[String], catalog: &[Recipe]) -> Vec<RankedRecipe> {
    let pantry_set: HashSet<String> = pantry.iter().map(|name| name.to_lowercase()).collect();

    let mut hits: Vec<RankedRecipe> = catalog
        .iter()
        .filter_map(|recipe| {
            let matched = recipe
                .needs
                .iter()
                .filter(|need| pantry_set.contains(need.as_str()))
                .count();
            if matched == 0 {
                return None;
            }
            Some(RankedRecipe {
                recipe: recipe.clone(),
                match_ratio: matched as f64 / recipe.needs.len() as f64,
            })
        })
        .collect();

    // Stable sort: ties keep catalog insertion order
    hits.sort_by(|a, b| b.match_ratio.total_cmp(&a.match_ratio));
    hits.truncate(MAX_SUGGESTIONS);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    fn pantry(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_empty_pantry_yields_empty_result() {
        assert!(rank_recipes(&[], &builtin_catalog()).is_empty());
    }

    #[test]
    fn test_exact_match_ranks_first_with_full_ratio() {
        let ranked = rank_recipes(&pantry(&["banana", "oats"]), &builtin_catalog());
        assert_eq!(ranked[0].recipe.name, "Banana Oatmeal");
        assert!((ranked[0].match_ratio - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let ranked = rank_recipes(&pantry(&["Banana", "OATS"]), &builtin_catalog());
        assert_eq!(ranked[0].recipe.name, "Banana Oatmeal");
        assert!((ranked[0].match_ratio - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_zero_ratio_entries() {
        let ranked = rank_recipes(&pantry(&["banana", "rice"]), &builtin_catalog());
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.match_ratio > 0.0));
    }

    #[test]
    fn test_pluralized_names_do_not_match() {
        let ranked = rank_recipes(&pantry(&["tomatoes"]), &builtin_catalog());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // One ingredient each from Banana Oatmeal and Egg Fried Rice: both 0.5
        let ranked = rank_recipes(&pantry(&["rice", "banana"]), &builtin_catalog());
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].recipe.name, "Banana Oatmeal");
        assert_eq!(ranked[1].recipe.name, "Egg Fried Rice");
    }

    #[test]
    fn test_duplicate_pantry_entries_collapse() {
        let once = rank_recipes(&pantry(&["banana"]), &builtin_catalog());
        let twice = rank_recipes(&pantry(&["banana", "Banana", "banana"]), &builtin_catalog());
        assert_eq!(once.len(), twice.len());
        assert!((once[0].match_ratio - twice[0].match_ratio).abs() < f64::EPSILON);
    }

    #[test]
    fn test_result_capped_at_five() {
        let catalog: Vec<Recipe> = (0..20)
            .map(|i| Recipe::new(format!("Recipe {i}"), &["salt"], "Season to taste."))
            .collect();
        let ranked = rank_recipes(&pantry(&["salt"]), &catalog);
        assert_eq!(ranked.len(), 5);
        // Cap preserves catalog order among equal ratios
        assert_eq!(ranked[0].recipe.name, "Recipe 0");
        assert_eq!(ranked[4].recipe.name, "Recipe 4");
    }
}
