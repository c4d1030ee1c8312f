//! Bridge configuration.

use crate::orchestrator::Orchestrator;
use crate::rescue::RescuePolicy;
use core::time::Duration;
use scholar_model_providers::openai_compat::{
    ChatCompletionsClient, DEFAULT_REQUEST_TIMEOUT, DEFAULT_TEMPERATURE, OpenAiCompatProvider,
};
use scholar_models::llm::GatewaySettings;
use scholar_models::{BridgeError, ProviderEndpointRegistry, SecretSource};
use std::sync::Arc;

/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "SCHOLAR_REQUEST_TIMEOUT_SECS";
/// Environment variable overriding the gateway's baseline model.
pub const GATEWAY_MODEL_ENV: &str = "SCHOLAR_GATEWAY_MODEL";
/// Environment variable overriding the rescue provider.
pub const RESCUE_PROVIDER_ENV: &str = "SCHOLAR_RESCUE_PROVIDER";
/// Environment variable overriding the rescue model.
pub const RESCUE_MODEL_ENV: &str = "SCHOLAR_RESCUE_MODEL";
/// Environment variable enabling rescue on empty gateway output.
pub const RESCUE_ON_EMPTY_ENV: &str = "SCHOLAR_RESCUE_ON_EMPTY_OUTPUT";

/// Immutable settings the bridge is built from.
///
/// Secrets are not part of the configuration; they come from a
/// [`SecretSource`] at build time.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use scholar_bridge::{BridgeConfig, RescuePolicy};
///
/// let config = BridgeConfig::default()
///     .with_request_timeout(Duration::from_secs(20))
///     .with_rescue_policy(RescuePolicy::new("openrouter", "meta-llama/llama-3.3-70b-instruct"));
///
/// assert_eq!(config.request_timeout, Duration::from_secs(20));
/// ```
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Managed gateway identity and baseline model.
    pub gateway: GatewaySettings,
    /// Rescue provider policy.
    pub rescue: RescuePolicy,
    /// Direct provider endpoints.
    pub registry: ProviderEndpointRegistry,
    /// Bound on each direct provider request.
    pub request_timeout: Duration,
    /// Sampling temperature for direct requests.
    pub temperature: f64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            gateway: GatewaySettings::default(),
            rescue: RescuePolicy::default(),
            registry: ProviderEndpointRegistry::with_defaults(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl BridgeConfig {
    /// Builds the configuration from process environment variables.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Configuration`] if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, BridgeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Configuration`] if a value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BridgeError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(TIMEOUT_ENV) {
            let seconds: u64 = raw.trim().parse().map_err(|_| {
                BridgeError::Configuration(format!(
                    "{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            if seconds == 0 {
                return Err(BridgeError::Configuration(format!(
                    "{TIMEOUT_ENV} must be greater than zero"
                )));
            }
            config.request_timeout = Duration::from_secs(seconds);
        }

        if let Some(model) = get(GATEWAY_MODEL_ENV) {
            config.gateway = config.gateway.with_default_model(model);
        }
        if let Some(provider) = get(RESCUE_PROVIDER_ENV) {
            config.rescue.provider = provider;
        }
        if let Some(model) = get(RESCUE_MODEL_ENV) {
            config.rescue.model = model;
        }
        if let Some(raw) = get(RESCUE_ON_EMPTY_ENV) {
            config.rescue.rescue_on_empty_output = parse_flag(RESCUE_ON_EMPTY_ENV, &raw)?;
        }

        Ok(config)
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the rescue policy.
    #[must_use]
    pub fn with_rescue_policy(mut self, rescue: RescuePolicy) -> Self {
        self.rescue = rescue;
        self
    }

    /// Sets the gateway settings.
    #[must_use]
    pub fn with_gateway(mut self, gateway: GatewaySettings) -> Self {
        self.gateway = gateway;
        self
    }

    /// Sets the endpoint registry.
    #[must_use]
    pub fn with_registry(mut self, registry: ProviderEndpointRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Builds the direct provider client described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn build_direct_client(
        &self,
        secrets: Arc<dyn SecretSource>,
    ) -> Result<OpenAiCompatProvider, BridgeError> {
        let client = ChatCompletionsClient::new(self.request_timeout)?;
        Ok(
            OpenAiCompatProvider::with_client(client, Arc::new(self.registry.clone()), secrets)
                .with_temperature(self.temperature),
        )
    }

    /// Builds an orchestrator backed by the OpenAI-compatible direct client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn build_orchestrator(
        &self,
        secrets: Arc<dyn SecretSource>,
    ) -> Result<Orchestrator, BridgeError> {
        let direct = self.build_direct_client(secrets)?;
        Ok(Orchestrator::new(Arc::new(direct))
            .with_gateway_settings(self.gateway.clone())
            .with_rescue_policy(self.rescue.clone()))
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, BridgeError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(BridgeError::Configuration(format!(
            "{key} must be a boolean, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_keeps_defaults() {
        let config = BridgeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.gateway, GatewaySettings::default());
        assert_eq!(config.rescue, RescuePolicy::default());
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn overrides_are_applied() {
        let config = BridgeConfig::from_lookup(lookup(&[
            (TIMEOUT_ENV, "15"),
            (GATEWAY_MODEL_ENV, "gemini-1.5-pro"),
            (RESCUE_PROVIDER_ENV, "openrouter"),
            (RESCUE_MODEL_ENV, "mistralai/mistral-small"),
            (RESCUE_ON_EMPTY_ENV, "true"),
        ]))
        .unwrap();

        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.gateway.default_model, "gemini-1.5-pro");
        assert_eq!(config.rescue.provider, "openrouter");
        assert_eq!(config.rescue.model, "mistralai/mistral-small");
        assert!(config.rescue.rescue_on_empty_output);
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err = BridgeConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "soon")])).unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_ENV));

        let err = BridgeConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "0")])).unwrap_err();
        assert!(matches!(err, BridgeError::Configuration(_)));
    }

    #[test]
    fn invalid_flag_is_rejected() {
        let err = BridgeConfig::from_lookup(lookup(&[(RESCUE_ON_EMPTY_ENV, "maybe")])).unwrap_err();
        assert!(err.to_string().contains(RESCUE_ON_EMPTY_ENV));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = BridgeConfig::from_lookup(lookup(&[(RESCUE_PROVIDER_ENV, "  ")])).unwrap();
        assert_eq!(config.rescue.provider, "groq");
    }
}
