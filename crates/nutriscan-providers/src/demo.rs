// ABOUTME: Offline demo products returned when the live Open Food Facts API fails
// ABOUTME: Known queries get curated records, anything else gets a generic placeholder
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Offline demo product data.
//!
//! The search surface must keep working in demos without network access, so
//! transport failures and empty live results fall back to this builtin data.
//! Queries for "banana" and "milk" get curated records; any other query gets
//! a single generic record named after the query.

use serde_json::{json, Value};

/// Builtin fallback products for a lowercased search query
#[must_use]
pub fn demo_products(query: &str) -> Vec<Value> {
    match query {
        "banana" => vec![json!({
            "product_name": "Banana",
            "brands": "Generic",
            "nutriments": {
                "energy-kcal_100g": 89,
                "carbohydrates_100g": 23,
                "sugars_100g": 12,
                "fiber_100g": 2.6
            }
        })],
        "milk" => vec![json!({
            "product_name": "Fresh Milk",
            "brands": "Generic",
            "nutriments": {
                "energy-kcal_100g": 42,
                "proteins_100g": 3.4,
                "fats_100g": 1.0,
                "calcium_100g": 120
            }
        })],
        other => vec![json!({
            "product_name": title_case(other),
            "brands": "Demo Data",
            "nutriments": {
                "energy-kcal_100g": 100,
                "proteins_100g": 2,
                "fats_100g": 1,
                "carbohydrates_100g": 20
            }
        })],
    }
}

/// Uppercase the first letter of each whitespace-separated word
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_queries_get_curated_records() {
        let products = demo_products("banana");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0]["product_name"], "Banana");
        assert_eq!(products[0]["brands"], "Generic");
    }

    #[test]
    fn test_unknown_query_gets_generic_record() {
        let products = demo_products("dragon fruit");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0]["product_name"], "Dragon Fruit");
        assert_eq!(products[0]["brands"], "Demo Data");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("green tea"), "Green Tea");
        assert_eq!(title_case(""), "");
    }
}
