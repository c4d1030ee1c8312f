//! Provider endpoint registry.

use std::collections::HashMap;

/// Default OpenAI-compatible chat-completions endpoints.
const DEFAULT_ENDPOINTS: &[(&str, &str)] = &[
    ("openai", "https://api.openai.com/v1/chat/completions"),
    ("groq", "https://api.groq.com/openai/v1/chat/completions"),
    ("openrouter", "https://openrouter.ai/api/v1/chat/completions"),
    ("deepseek", "https://api.deepseek.com/chat/completions"),
];

/// Mapping from provider identifier to its chat-completions URL.
///
/// The registry is assembled once at startup and then shared read-only
/// (typically behind an `Arc`) by every backend that performs direct calls.
///
/// ```
/// use scholar_models::ProviderEndpointRegistry;
///
/// let registry = ProviderEndpointRegistry::new()
///     .with_endpoint("local", "http://127.0.0.1:8080/v1/chat/completions");
///
/// assert_eq!(
///     registry.endpoint("local"),
///     Some("http://127.0.0.1:8080/v1/chat/completions")
/// );
/// assert!(registry.endpoint("openai").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProviderEndpointRegistry {
    endpoints: HashMap<String, String>,
}

impl ProviderEndpointRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoints: HashMap::new(),
        }
    }

    /// Creates a registry holding the four built-in providers
    /// (`openai`, `groq`, `openrouter`, `deepseek`).
    #[must_use]
    pub fn with_defaults() -> Self {
        DEFAULT_ENDPOINTS
            .iter()
            .fold(Self::new(), |registry, (name, url)| {
                registry.with_endpoint(*name, *url)
            })
    }

    /// Adds or replaces the endpoint for a provider.
    #[must_use]
    pub fn with_endpoint(mut self, provider: impl Into<String>, url: impl Into<String>) -> Self {
        self.endpoints.insert(provider.into(), url.into());
        self
    }

    /// Returns the endpoint URL for a provider.
    #[must_use]
    pub fn endpoint(&self, provider: impl AsRef<str>) -> Option<&str> {
        self.endpoints.get(provider.as_ref()).map(String::as_str)
    }

    /// Checks if a provider is registered.
    #[must_use]
    pub fn contains(&self, provider: impl AsRef<str>) -> bool {
        self.endpoints.contains_key(provider.as_ref())
    }

    /// Lists registered provider names, sorted.
    #[must_use]
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.endpoints.keys().cloned().collect();
        names.sort();
        names
    }
}
