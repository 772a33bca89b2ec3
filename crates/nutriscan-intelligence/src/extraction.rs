// ABOUTME: Best-effort extraction of a structured list from free-text model output
// ABOUTME: Capability trait with a bracket-span strategy plus the fallback record composer
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured-list extraction from free-text model responses.
//!
//! Model output is prose that usually embeds a JSON array somewhere. Parsing
//! it is inherently best-effort, so extraction is a capability trait with
//! explicit outcomes rather than a fixed regular expression: a strategy can
//! be swapped without touching the degradation contract of the enhanced
//! recipe path.
//!
//! The three outcomes map to distinct behaviors upstream:
//!
//! - [`ExtractedList::List`]: the parsed array is returned to the caller
//!   verbatim, without schema validation
//! - [`ExtractedList::Malformed`]: a list-like span was found but did not
//!   parse; treated as a failed call (rule-based fallback)
//! - [`ExtractedList::Absent`]: no list-like span at all; a single
//!   [`GeneratedRecipe`] is synthesized from the pantry and the raw text

use nutriscan_core::constants::recipes::{FALLBACK_INSTRUCTIONS_CHARS, FALLBACK_RECIPE_NAME};
use nutriscan_core::models::GeneratedRecipe;
use serde_json::Value;

/// Outcome of running a list extractor over a model response
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedList {
    /// A parseable array was found; elements pass through unvalidated
    List(Vec<Value>),
    /// A list-like span was found but could not be parsed
    Malformed,
    /// The response carries no list-like span
    Absent,
}

/// Strategy for locating a structured list inside free text
pub trait ListExtractor: Send + Sync {
    /// Attempt to extract a structured list from `text`
    fn extract(&self, text: &str) -> ExtractedList;
}

/// Extracts the span from the first `[` to the last `]` and parses it as a
/// JSON array. Greedy on purpose: nested arrays inside the outer list stay
/// part of the span.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketSpanExtractor;

impl ListExtractor for BracketSpanExtractor {
    fn extract(&self, text: &str) -> ExtractedList {
        let Some(start) = text.find('[') else {
            return ExtractedList::Absent;
        };
        let Some(end) = text.rfind(']') else {
            return ExtractedList::Absent;
        };
        if end < start {
            return ExtractedList::Absent;
        }

        match serde_json::from_str::<Value>(&text[start..=end]) {
            Ok(Value::Array(items)) => ExtractedList::List(items),
            _ => ExtractedList::Malformed,
        }
    }
}

/// Compose the single fallback record used when a response carries no
/// extractable list: the raw pantry as ingredients and the leading 200
/// characters of the response as instructions.
#[must_use]
pub fn fallback_recipe(pantry: &[String], response_text: &str) -> GeneratedRecipe {
    GeneratedRecipe {
        name: FALLBACK_RECIPE_NAME.to_owned(),
        ingredients: pantry.to_vec(),
        instructions: response_text
            .chars()
            .take(FALLBACK_INSTRUCTIONS_CHARS)
            .collect(),
    }
}
