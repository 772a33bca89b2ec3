// ABOUTME: Recipe suggestion service with LLM enhancement and a deterministic fallback
// ABOUTME: Degrades to catalog ranking on any model failure; never errors to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recipe suggestion service.
//!
//! The suggestion path is infallible by contract: whatever the model or the
//! network does, the caller gets a JSON array. Without a configured LLM
//! provider the builtin catalog is ranked against the pantry. With one, the
//! model response is mined for a JSON list and the outcome decides the
//! shape:
//!
//! - a parseable list passes through verbatim, unvalidated
//! - a response with no list at all becomes a single composed recipe
//! - anything else (transport error, bad credentials, malformed list)
//!   degrades to the same catalog ranking the unconfigured path uses

use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use nutriscan_intelligence::{
    builtin_catalog, fallback_recipe, rank_recipes, BracketSpanExtractor, ExtractedList,
    ListExtractor,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Sampling temperature for recipe generation
const TEMPERATURE: f64 = 0.3;

/// Recipe suggestion service
pub struct RecipeSuggester {
    llm: Option<Arc<dyn LlmProvider>>,
    extractor: Box<dyn ListExtractor>,
}

impl RecipeSuggester {
    /// Create a suggester; `None` disables the LLM path entirely
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmProvider>>) -> Self {
        Self {
            llm,
            extractor: Box::new(BracketSpanExtractor),
        }
    }

    /// Whether the LLM-enhanced path is active
    #[must_use]
    pub fn llm_enabled(&self) -> bool {
        self.llm.is_some()
    }

    /// Suggest recipes for a pantry. Infallible: always returns a JSON array.
    pub async fn suggest(&self, pantry: &[String], goal: &str) -> Vec<Value> {
        let Some(llm) = &self.llm else {
            return Self::rule_based(pantry);
        };

        let request = ChatRequest {
            messages: vec![ChatMessage::user(build_prompt(pantry, goal))],
            model: None,
            temperature: Some(TEMPERATURE),
        };

        let response = match llm.complete(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(provider = llm.name(), error = %e, "recipe generation failed, using catalog ranking");
                return Self::rule_based(pantry);
            }
        };

        match self.extractor.extract(&response.content) {
            ExtractedList::List(items) => {
                debug!(count = items.len(), "model returned a recipe list");
                items
            }
            ExtractedList::Absent => {
                debug!("model returned prose without a list, composing single recipe");
                serde_json::to_value(fallback_recipe(pantry, &response.content))
                    .map_or_else(|_| Self::rule_based(pantry), |recipe| vec![recipe])
            }
            ExtractedList::Malformed => {
                warn!("model returned an unparseable list, using catalog ranking");
                Self::rule_based(pantry)
            }
        }
    }

    /// Rank the builtin catalog against the pantry
    fn rule_based(pantry: &[String]) -> Vec<Value> {
        rank_recipes(pantry, &builtin_catalog())
            .into_iter()
            .filter_map(|ranked| serde_json::to_value(ranked).ok())
            .collect()
    }
}

fn build_prompt(pantry: &[String], goal: &str) -> String {
    let items = pantry.join(", ");
    format!(
        "Create 3 simple, low-cost recipes using ONLY these pantry items: {items}. \
         Each recipe: name, ingredients list, and 3-step instructions. \
         Health goal: {goal}. Return JSON list."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ChatResponse, LlmProvider};
    use async_trait::async_trait;
    use nutriscan_core::errors::{AppError, AppResult};

    /// Scripted provider returning a canned outcome
    struct ScriptedProvider {
        outcome: Result<String, String>,
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn default_model(&self) -> &str {
            "scripted-model"
        }

        async fn complete(&self, _request: ChatRequest) -> AppResult<ChatResponse> {
            match &self.outcome {
                Ok(content) => Ok(ChatResponse {
                    content: content.clone(),
                    model: "scripted-model".to_owned(),
                    usage: None,
                }),
                Err(message) => Err(AppError::external_service("scripted", message.clone())),
            }
        }
    }

    fn pantry() -> Vec<String> {
        vec!["banana".to_owned(), "oats".to_owned()]
    }

    #[tokio::test]
    async fn test_no_provider_ranks_catalog() {
        let suggester = RecipeSuggester::new(None);
        let recipes = suggester.suggest(&pantry(), "balanced").await;

        assert!(!recipes.is_empty());
        assert_eq!(recipes[0]["name"], "Banana Oatmeal");
        assert!(recipes[0]["match"].is_number());
    }

    #[tokio::test]
    async fn test_provider_error_degrades_to_catalog() {
        let provider = Arc::new(ScriptedProvider {
            outcome: Err("connection refused".to_owned()),
        });
        let suggester = RecipeSuggester::new(Some(provider));
        let recipes = suggester.suggest(&pantry(), "balanced").await;

        assert_eq!(recipes[0]["name"], "Banana Oatmeal");
    }

    #[tokio::test]
    async fn test_model_list_passes_through_verbatim() {
        let provider = Arc::new(ScriptedProvider {
            outcome: Ok(r#"Sure! [{"name": "Oat Bowl", "extra_field": 42}]"#.to_owned()),
        });
        let suggester = RecipeSuggester::new(Some(provider));
        let recipes = suggester.suggest(&pantry(), "balanced").await;

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0]["name"], "Oat Bowl");
        // No schema validation on the model's output
        assert_eq!(recipes[0]["extra_field"], 42);
    }

    #[tokio::test]
    async fn test_prose_response_composes_single_recipe() {
        let provider = Arc::new(ScriptedProvider {
            outcome: Ok("Try mashing the banana into the oats and baking.".to_owned()),
        });
        let suggester = RecipeSuggester::new(Some(provider));
        let recipes = suggester.suggest(&pantry(), "balanced").await;

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0]["name"], "Chef Special");
        assert_eq!(recipes[0]["ingredients"], serde_json::json!(["banana", "oats"]));
    }

    #[tokio::test]
    async fn test_malformed_list_degrades_to_catalog() {
        let provider = Arc::new(ScriptedProvider {
            outcome: Ok("recipes: [not valid json]".to_owned()),
        });
        let suggester = RecipeSuggester::new(Some(provider));
        let recipes = suggester.suggest(&pantry(), "balanced").await;

        assert_eq!(recipes[0]["name"], "Banana Oatmeal");
    }

    #[test]
    fn test_prompt_includes_pantry_and_goal() {
        let prompt = build_prompt(&pantry(), "high-protein");
        assert!(prompt.contains("banana, oats"));
        assert!(prompt.contains("Health goal: high-protein"));
        assert!(prompt.contains("Return JSON list."));
    }
}
