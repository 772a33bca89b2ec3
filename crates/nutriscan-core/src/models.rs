// ABOUTME: Domain data models for the NutriScan backend
// ABOUTME: Nutrient records, food products, recipes, and persistence row types
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core data models shared across the workspace.
//!
//! `NutrientRecord` wraps raw Open Food Facts nutriment JSON so product data
//! passes through the API untouched while still offering typed numeric reads
//! for the handful of keys the health scorer cares about.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-100g nutrient values for a food item, keyed by Open Food Facts
/// nutriment names (`energy-kcal_100g`, `sugars_100g`, ...).
///
/// The record is a transparent wrapper over the raw JSON object: unknown keys
/// round-trip verbatim through serialization. Absent, null, or non-numeric
/// values read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientRecord(pub Map<String, Value>);

impl NutrientRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Read a nutrient value as f64, if present and numeric
    #[must_use]
    pub fn numeric(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Read a nutrient value, treating absent or non-numeric values as zero
    #[must_use]
    pub fn numeric_or_zero(&self, key: &str) -> f64 {
        self.numeric(key).unwrap_or(0.0)
    }

    /// Energy in kcal/100g.
    ///
    /// Reads `energy-kcal_100g` first; a missing, zero, or non-numeric value
    /// falls through to the `energy-kcal` key.
    #[must_use]
    pub fn kcal(&self) -> f64 {
        self.numeric("energy-kcal_100g")
            .filter(|v| *v != 0.0)
            .or_else(|| self.numeric("energy-kcal"))
            .unwrap_or(0.0)
    }

    /// Sugars in g/100g
    #[must_use]
    pub fn sugars(&self) -> f64 {
        self.numeric_or_zero("sugars_100g")
    }

    /// Fiber in g/100g
    #[must_use]
    pub fn fiber(&self) -> f64 {
        self.numeric_or_zero("fiber_100g")
    }

    /// Protein in g/100g
    #[must_use]
    pub fn protein(&self) -> f64 {
        self.numeric_or_zero("proteins_100g")
    }
}

impl From<Map<String, Value>> for NutrientRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// The slice of an Open Food Facts product the API exposes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodProduct {
    /// Product name as reported by the database
    #[serde(default)]
    pub product_name: Option<String>,
    /// Brand names, comma-separated
    #[serde(default)]
    pub brands: Option<String>,
    /// Per-100g nutrient values
    #[serde(default)]
    pub nutriments: NutrientRecord,
}

/// A recipe from the static catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe display name
    pub name: String,
    /// Required ingredient names, lowercase
    pub needs: Vec<String>,
    /// Preparation instructions
    pub instructions: String,
}

impl Recipe {
    /// Create a recipe from its name, required ingredients, and instructions
    pub fn new(
        name: impl Into<String>,
        needs: &[&str],
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            needs: needs.iter().map(|s| (*s).to_owned()).collect(),
            instructions: instructions.into(),
        }
    }
}

/// A catalog recipe plus its pantry match ratio in (0, 1]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedRecipe {
    /// The matched recipe, flattened into the same JSON object
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Matched required ingredients over total required ingredients
    #[serde(rename = "match")]
    pub match_ratio: f64,
}

/// The single fallback record the enhanced recipe path synthesizes when a
/// model response carries no extractable list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    /// Fixed placeholder name
    pub name: String,
    /// The caller's pantry, passed through as-is
    pub ingredients: Vec<String>,
    /// Leading slice of the raw model response
    pub instructions: String,
}

/// A pantry item row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryItem {
    /// Row id
    pub id: i64,
    /// Ingredient name, trimmed
    pub name: String,
    /// Quantity on hand (unit left to the caller)
    pub quantity: f64,
}

/// A donation row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    /// Row id
    pub id: i64,
    /// Donor display name
    pub user_name: String,
    /// Donated item description
    pub item: String,
    /// Free-text quantity ("2 cans", "1")
    pub quantity: String,
    /// Pickup latitude
    pub lat: f64,
    /// Pickup longitude
    pub lng: f64,
    /// Free-text note
    pub note: String,
}

/// A lesson row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Row id
    pub id: i64,
    /// Lesson title
    pub title: String,
    /// Lesson body
    pub content: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> NutrientRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_nutrient_record_roundtrips_unknown_keys() {
        let raw = json!({"energy-kcal_100g": 89.0, "calcium_100g": 120.0});
        let rec = record(raw.clone());
        assert_eq!(serde_json::to_value(&rec).unwrap(), raw);
    }

    #[test]
    fn test_kcal_falls_through_on_zero_primary_key() {
        let rec = record(json!({"energy-kcal_100g": 0, "energy-kcal": 250.0}));
        assert!((rec.kcal() - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_kcal_falls_through_on_non_numeric_primary_key() {
        let rec = record(json!({"energy-kcal_100g": "n/a", "energy-kcal": 42.0}));
        assert!((rec.kcal() - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_absent_nutrients_read_as_zero() {
        let rec = NutrientRecord::new();
        assert!(rec.kcal().abs() < f64::EPSILON);
        assert!(rec.sugars().abs() < f64::EPSILON);
        assert!(rec.fiber().abs() < f64::EPSILON);
        assert!(rec.protein().abs() < f64::EPSILON);
    }

    #[test]
    fn test_ranked_recipe_flattens_into_wire_shape() {
        let ranked = RankedRecipe {
            recipe: Recipe::new("Banana Oatmeal", &["banana", "oats"], "Cook oats."),
            match_ratio: 0.5,
        };
        let value = serde_json::to_value(&ranked).unwrap();
        assert_eq!(value["name"], "Banana Oatmeal");
        assert_eq!(value["needs"], json!(["banana", "oats"]));
        assert_eq!(value["match"], json!(0.5));
    }
}
