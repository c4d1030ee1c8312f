//! Capability contracts and the runtime adapter registry.

use crate::normalizer::{self, NormalizationTier};
use schemars::JsonSchema;
use scholar_models::llm::{GATEWAY_PROVIDER, Route};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;

/// One AI-assisted feature: its input/output contract, prompt template and
/// fallback shape.
///
/// Each capability owns the synthesis of its output from unstructured text,
/// so the normalizer does not need to know every output shape.
///
/// # Example
///
/// ```
/// use scholar_bridge::capability::Capability;
/// use scholar_bridge::normalizer::NormalizationTier;
/// use schemars::JsonSchema;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Serialize, Deserialize, JsonSchema)]
/// struct Definition {
///     definition: String,
/// }
///
/// struct Define;
///
/// impl Capability for Define {
///     const ID: &'static str = "define";
///     type Input = String;
///     type Output = Definition;
///
///     fn system_prompt(&self, _term: &String) -> String {
///         "Define terms for a high-school student.".to_string()
///     }
///
///     fn user_prompt(&self, term: &String) -> String {
///         format!("Define: {term}")
///     }
///
///     fn synthesize(&self, text: &str, _tier: NormalizationTier) -> Definition {
///         Definition { definition: text.to_string() }
///     }
/// }
/// ```
pub trait Capability: Send + Sync + 'static {
    /// Stable identifier, used in logs and the [`CapabilityRegistry`].
    const ID: &'static str;

    /// Structured input handed to the gateway call.
    type Input: Send;

    /// Declared output contract.
    type Output: Serialize + DeserializeOwned + JsonSchema + Send;

    /// Provider/model pair this capability prefers.
    ///
    /// Defaults to the managed gateway with its baseline model.
    fn default_route(&self) -> Route {
        Route::provider(GATEWAY_PROVIDER)
    }

    /// Renders the system prompt for `input`.
    fn system_prompt(&self, input: &Self::Input) -> String;

    /// Renders the user prompt for `input`.
    fn user_prompt(&self, input: &Self::Input) -> String;

    /// Builds an output from unstructured `text` (already stripped of code fences).
    fn synthesize(&self, text: &str, tier: NormalizationTier) -> Self::Output;
}

type Adapter = Arc<dyn Fn(&str, NormalizationTier) -> serde_json::Value + Send + Sync>;

/// Maps capability identifiers to their normalization adapters.
///
/// Used where only a capability id is known at runtime (for instance when
/// replaying a stored raw reply). Unknown ids fall back to the superset
/// object from [`normalizer::normalize`].
#[derive(Default, Clone)]
pub struct CapabilityRegistry {
    adapters: HashMap<&'static str, Adapter>,
}

impl CapabilityRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a capability's adapter.
    ///
    /// # Panics
    ///
    /// Panics if a capability with the same id is already registered.
    #[must_use]
    pub fn with<C: Capability>(mut self, capability: C) -> Self {
        assert!(
            !self.adapters.contains_key(C::ID),
            "capability '{}' is already registered",
            C::ID
        );

        let adapter: Adapter = Arc::new(move |raw: &str, tier: NormalizationTier| {
            let output = normalizer::normalize_into(&capability, raw, tier);
            serde_json::to_value(output)
                .unwrap_or_else(|_| normalizer::normalize(raw, tier))
        });
        self.adapters.insert(C::ID, adapter);
        self
    }

    /// Whether a capability id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.adapters.contains_key(id)
    }

    /// Lists registered capability ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.adapters.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Normalizes `raw` with the adapter registered for `id`.
    #[must_use]
    pub fn normalize(&self, id: &str, raw: &str, tier: NormalizationTier) -> serde_json::Value {
        match self.adapters.get(id) {
            Some(adapter) => adapter(raw, tier),
            None => {
                tracing::debug!(capability = id, "no adapter registered, using superset normalization");
                normalizer::normalize(raw, tier)
            }
        }
    }
}

impl core::fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("capabilities", &self.ids())
            .finish()
    }
}
