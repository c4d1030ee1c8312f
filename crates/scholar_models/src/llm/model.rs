//! Managed gateway identity and model naming.

/// Provider identifier of the managed gateway.
pub const GATEWAY_PROVIDER: &str = "google";

/// Namespace the gateway expects in front of model identifiers.
pub const GATEWAY_NAMESPACE: &str = "googleai";

/// Baseline model used when a request names none.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Identity of the managed gateway and its naming rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySettings {
    /// Provider identifier that routes a request to the gateway.
    pub provider: String,
    /// Model namespace prefix (without the trailing `/`).
    pub namespace: String,
    /// Baseline model identifier.
    pub default_model: String,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            provider: GATEWAY_PROVIDER.to_string(),
            namespace: GATEWAY_NAMESPACE.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl GatewaySettings {
    /// Sets the baseline model.
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Whether `provider` designates the managed gateway.
    #[must_use]
    pub fn is_gateway(&self, provider: &str) -> bool {
        provider == self.provider
    }

    /// Resolves a model to its namespaced gateway form.
    ///
    /// Falls back to the baseline model and leaves identifiers that already
    /// carry a namespace untouched.
    ///
    /// ```
    /// use scholar_models::llm::GatewaySettings;
    ///
    /// let settings = GatewaySettings::default();
    /// assert_eq!(settings.resolve_model(None), "googleai/gemini-2.0-flash");
    /// assert_eq!(settings.resolve_model(Some("gemini-1.5-pro")), "googleai/gemini-1.5-pro");
    /// assert_eq!(settings.resolve_model(Some("vertexai/gemini-1.5-pro")), "vertexai/gemini-1.5-pro");
    /// ```
    #[must_use]
    pub fn resolve_model(&self, model: Option<&str>) -> String {
        let model = model.unwrap_or(&self.default_model);
        if model.contains('/') {
            model.to_string()
        } else {
            format!("{}/{model}", self.namespace)
        }
    }

    /// Strips the gateway namespace from a model identifier, if present.
    #[must_use]
    pub fn bare_model<'a>(&self, model: &'a str) -> &'a str {
        model
            .strip_prefix(&self.namespace)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_use_google() {
        let settings = GatewaySettings::default();
        assert!(settings.is_gateway("google"));
        assert!(!settings.is_gateway("groq"));
    }

    #[test]
    fn resolve_model_is_idempotent() {
        let settings = GatewaySettings::default();
        let once = settings.resolve_model(Some("gemini-2.0-flash"));
        assert_eq!(settings.resolve_model(Some(&once)), once);
    }

    #[test]
    fn bare_model_strips_only_own_namespace() {
        let settings = GatewaySettings::default();
        assert_eq!(settings.bare_model("googleai/gemini-2.0-flash"), "gemini-2.0-flash");
        assert_eq!(settings.bare_model("vertexai/gemini"), "vertexai/gemini");
        assert_eq!(settings.bare_model("googleaix"), "googleaix");
    }
}
