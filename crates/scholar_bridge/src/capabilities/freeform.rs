//! Untyped capability for ad-hoc prompts.

use crate::capability::Capability;
use crate::normalizer::{NormalizationTier, synthesize_superset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prompts supplied verbatim by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeformPrompt {
    /// System prompt.
    pub system: String,
    /// User prompt.
    pub user: String,
}

impl FreeformPrompt {
    /// Creates a prompt pair.
    #[must_use]
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// Capability whose output shape is not known in advance.
///
/// Prose replies become the superset object of the requested tier.
#[derive(Debug, Default, Clone, Copy)]
pub struct Freeform;

impl Capability for Freeform {
    const ID: &'static str = "freeform";
    type Input = FreeformPrompt;
    type Output = Value;

    fn system_prompt(&self, input: &FreeformPrompt) -> String {
        input.system.clone()
    }

    fn user_prompt(&self, input: &FreeformPrompt) -> String {
        input.user.clone()
    }

    fn synthesize(&self, text: &str, tier: NormalizationTier) -> Value {
        synthesize_superset(text, tier)
    }
}
