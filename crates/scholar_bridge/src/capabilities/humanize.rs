//! Rewrites text in a natural student voice.

use crate::capability::Capability;
use crate::normalizer::NormalizationTier;
use schemars::JsonSchema;
use scholar_models::llm::Route;
use serde::{Deserialize, Serialize};

/// Text to rewrite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanizeInput {
    /// Original text.
    pub text: String,
}

/// Rewritten text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HumanizedText {
    /// The rewrite.
    pub humanized_text: String,
}

/// Rewrites text so it reads naturally.
#[derive(Debug, Default, Clone, Copy)]
pub struct Humanize;

impl Capability for Humanize {
    const ID: &'static str = "humanize";
    type Input = HumanizeInput;
    type Output = HumanizedText;

    fn default_route(&self) -> Route {
        Route::new("groq", "llama-3.3-70b-versatile")
    }

    fn system_prompt(&self, _input: &HumanizeInput) -> String {
        "Rewrite the user's text so it sounds natural and conversational while keeping its meaning. \
         Return only the rewritten text."
            .to_string()
    }

    fn user_prompt(&self, input: &HumanizeInput) -> String {
        input.text.clone()
    }

    fn synthesize(&self, text: &str, _tier: NormalizationTier) -> HumanizedText {
        HumanizedText {
            humanized_text: text.to_string(),
        }
    }
}
