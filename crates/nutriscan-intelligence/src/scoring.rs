// ABOUTME: Health score heuristic mapping nutrient records to a 1-10 integer
// ABOUTME: Deterministic, total over any numeric input, no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health score heuristic.
//!
//! Maps per-100g nutrient values to an integer score in \[1, 10\]:
//!
//! - base score 10
//! - minus 2 when caloric density exceeds 400 kcal/100g
//! - plus a fiber bonus of `min(2, fiber / 5)`
//! - plus a protein bonus of `min(2, protein / 10)`
//! - minus a sugar penalty of `min(3, sugar / 10)`
//!
//! The sum is rounded half-to-even (banker's rounding, so a computed 8.5
//! scores 8) and clamped into the \[1, 10\] range. Absent or non-numeric
//! nutrient values read as zero, so the function is total: no input can make
//! it fail or leave the range.

use nutriscan_core::constants::scoring::{KCAL_PENALTY_THRESHOLD, MAX_SCORE, MIN_SCORE};
use nutriscan_core::models::NutrientRecord;

/// Fiber grams per bonus point; the bonus saturates at 2 points
const FIBER_DIVISOR: f64 = 5.0;
/// Protein grams per bonus point; the bonus saturates at 2 points
const PROTEIN_DIVISOR: f64 = 10.0;
/// Sugar grams per penalty point; the penalty saturates at 3 points
const SUGAR_DIVISOR: f64 = 10.0;

/// Compute the 1-10 health score for a nutrient record.
///
/// Deterministic and total: negative or absurdly large nutrient values are
/// absorbed by the final clamp.
#[must_use]
pub fn health_score(nutrients: &NutrientRecord) -> u8 {
    let kcal = nutrients.kcal();
    let sugar = nutrients.sugars();
    let fiber = nutrients.fiber();
    let protein = nutrients.protein();

    let mut score = f64::from(MAX_SCORE);
    if kcal > KCAL_PENALTY_THRESHOLD {
        score -= 2.0;
    }
    score += (fiber / FIBER_DIVISOR).min(2.0);
    score += (protein / PROTEIN_DIVISOR).min(2.0);
    score -= (sugar / SUGAR_DIVISOR).min(3.0);

    // Banker's rounding, then clamp into [1, 10]
    let rounded = score.round_ties_even();
    rounded.clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u8
}
