//! API key resolution.

use std::collections::HashMap;

/// Returns the configuration key holding the API key for a provider.
///
/// The key is the provider identifier uppercased, with `-` and `.` mapped
/// to `_`, followed by `_API_KEY`.
///
/// ```
/// use scholar_models::api_key_var;
///
/// assert_eq!(api_key_var("openrouter"), "OPENROUTER_API_KEY");
/// assert_eq!(api_key_var("my-proxy"), "MY_PROXY_API_KEY");
/// ```
#[must_use]
pub fn api_key_var(provider: &str) -> String {
    let mut key: String = provider
        .chars()
        .map(|c| match c {
            '-' | '.' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect();
    key.push_str("_API_KEY");
    key
}

/// Source of secret configuration values.
pub trait SecretSource: Send + Sync + 'static {
    /// Looks up a secret by key. Blank values count as absent.
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads secrets from process environment variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSecrets;

impl SecretSource for EnvSecrets {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }
}

/// In-memory secrets, mainly for tests and embedding.
#[derive(Default, Clone)]
pub struct StaticSecrets {
    values: HashMap<String, String>,
}

impl StaticSecrets {
    /// Creates an empty secret store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a secret.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SecretSource for StaticSecrets {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }
}

impl core::fmt::Debug for StaticSecrets {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut keys: Vec<&String> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("StaticSecrets")
            .field("keys", &keys)
            .field("values", &"[REDACTED]")
            .finish()
    }
}
