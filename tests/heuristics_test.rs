// ABOUTME: Property-style tests for the health scorer and recipe ranker
// ABOUTME: Pins bounds, saturation points, the rounding rule, and ranking invariants
#![allow(clippy::unwrap_used, clippy::expect_used)]

use nutriscan_core::models::NutrientRecord;
use nutriscan_intelligence::{builtin_catalog, health_score, rank_recipes};
use serde_json::json;

fn record(value: serde_json::Value) -> NutrientRecord {
    serde_json::from_value(value).unwrap()
}

fn pantry(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn test_clean_low_calorie_records_score_ten() {
    for kcal in [0, 100, 250, 400] {
        let rec = record(json!({"energy-kcal_100g": kcal}));
        assert_eq!(health_score(&rec), 10, "kcal={kcal}");
    }
}

#[test]
fn test_score_always_within_bounds() {
    let extremes = [
        json!({}),
        json!({"energy-kcal_100g": 1e9, "sugars_100g": 1e9}),
        json!({"fiber_100g": 1e9, "proteins_100g": 1e9}),
        json!({"energy-kcal_100g": -500, "sugars_100g": -40}),
        json!({"energy-kcal_100g": "garbage", "fiber_100g": null}),
    ];

    for raw in extremes {
        let score = health_score(&record(raw.clone()));
        assert!((1..=10).contains(&score), "out of bounds for {raw}");
    }
}

#[test]
fn test_fiber_bonus_saturates_at_ten_grams() {
    let at_cap = record(json!({"energy-kcal_100g": 500, "fiber_100g": 10}));
    let beyond_cap = record(json!({"energy-kcal_100g": 500, "fiber_100g": 50}));
    assert_eq!(health_score(&at_cap), health_score(&beyond_cap));
}

#[test]
fn test_sugar_penalty_saturation_scores_seven() {
    let rec = record(json!({"sugars_100g": 30}));
    assert_eq!(health_score(&rec), 7);
}

#[test]
fn test_half_integer_rounds_to_even() {
    // 10 - 2 (kcal over 400) + 0.5 (protein 5g) = 8.5, banker's rounding gives 8
    let rec = record(json!({"energy-kcal_100g": 500, "proteins_100g": 5}));
    assert_eq!(health_score(&rec), 8);
}

#[test]
fn test_score_monotonic_in_fiber_and_protein() {
    let mut prev_fiber = 0;
    let mut prev_protein = 0;
    for grams in 0..25 {
        let fiber_score = health_score(&record(
            json!({"energy-kcal_100g": 450, "sugars_100g": 20, "fiber_100g": grams}),
        ));
        let protein_score = health_score(&record(
            json!({"energy-kcal_100g": 450, "sugars_100g": 20, "proteins_100g": grams}),
        ));
        assert!(fiber_score >= prev_fiber);
        assert!(protein_score >= prev_protein);
        prev_fiber = fiber_score;
        prev_protein = protein_score;
    }
}

#[test]
fn test_score_non_increasing_in_sugar() {
    let mut prev = 10;
    for grams in 0..40 {
        let score = health_score(&record(json!({"sugars_100g": grams})));
        assert!(score <= prev);
        prev = score;
    }
}

#[test]
fn test_crossing_kcal_threshold_drops_score() {
    let below = health_score(&record(json!({"energy-kcal_100g": 400})));
    let above = health_score(&record(json!({"energy-kcal_100g": 401})));
    assert!(above < below);
}

#[test]
fn test_empty_pantry_ranks_nothing() {
    assert!(rank_recipes(&[], &builtin_catalog()).is_empty());
}

#[test]
fn test_full_match_ranks_first_with_ratio_one() {
    let ranked = rank_recipes(&pantry(&["banana", "oats", "rice"]), &builtin_catalog());
    assert_eq!(ranked[0].recipe.name, "Banana Oatmeal");
    assert!((ranked[0].match_ratio - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_matching_is_case_insensitive() {
    let ranked = rank_recipes(&pantry(&["Banana", "OATS"]), &builtin_catalog());
    assert_eq!(ranked[0].recipe.name, "Banana Oatmeal");
}

#[test]
fn test_no_zero_ratio_recipes_in_output() {
    let ranked = rank_recipes(&pantry(&["banana"]), &builtin_catalog());
    assert!(ranked.iter().all(|r| r.match_ratio > 0.0));
    assert!(ranked.iter().all(|r| r.recipe.name != "Egg Fried Rice"));
}

#[test]
fn test_plural_forms_do_not_match() {
    // Matching is literal: "tomatoes" is not "tomato"
    let ranked = rank_recipes(&pantry(&["tomatoes"]), &builtin_catalog());
    assert!(ranked.is_empty());
}
