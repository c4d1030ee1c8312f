//! OpenAI-compatible [`DirectProvider`] implementation.

use super::client::{ChatCompletionsClient, DEFAULT_REQUEST_TIMEOUT};
use super::types::ChatCompletionRequest;
use async_trait::async_trait;
use core::time::Duration;
use scholar_models::llm::{ChatMessage, DirectProvider};
use scholar_models::{BridgeError, EnvSecrets, ProviderEndpointRegistry, SecretSource, api_key_var};
use std::sync::Arc;

/// Sampling temperature sent with every direct request.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Direct provider client for OpenAI-compatible chat-completions endpoints.
///
/// Resolves the endpoint from an injected [`ProviderEndpointRegistry`] and the
/// API key from an injected [`SecretSource`] under `<PROVIDER>_API_KEY`.
///
/// ```no_run
/// # use scholar_model_providers::openai_compat::OpenAiCompatProvider;
/// # use scholar_models::ProviderEndpointRegistry;
/// # use scholar_models::llm::DirectProvider;
/// # use std::sync::Arc;
/// # async fn run() -> Result<(), scholar_models::BridgeError> {
/// let provider = OpenAiCompatProvider::from_env(Arc::new(ProviderEndpointRegistry::with_defaults()))?;
///
/// let text = provider
///     .call_direct("groq", "llama-3.3-70b-versatile", "You are a tutor.", "What is osmosis?")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OpenAiCompatProvider {
    client: ChatCompletionsClient,
    registry: Arc<ProviderEndpointRegistry>,
    secrets: Arc<dyn SecretSource>,
    temperature: f64,
}

impl OpenAiCompatProvider {
    /// Creates a provider with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        registry: Arc<ProviderEndpointRegistry>,
        secrets: Arc<dyn SecretSource>,
    ) -> Result<Self, BridgeError> {
        Ok(Self::with_client(
            ChatCompletionsClient::new(DEFAULT_REQUEST_TIMEOUT)?,
            registry,
            secrets,
        ))
    }

    /// Creates a provider that reads API keys from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_env(registry: Arc<ProviderEndpointRegistry>) -> Result<Self, BridgeError> {
        Self::new(registry, Arc::new(EnvSecrets))
    }

    /// Creates a provider around an existing HTTP client.
    #[must_use]
    pub fn with_client(
        client: ChatCompletionsClient,
        registry: Arc<ProviderEndpointRegistry>,
        secrets: Arc<dyn SecretSource>,
    ) -> Self {
        Self {
            client,
            registry,
            secrets,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Replaces the HTTP client with one bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero or the client cannot be built.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, BridgeError> {
        self.client = ChatCompletionsClient::new(timeout)?;
        Ok(self)
    }

    /// Sets the sampling temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Returns the endpoint registry.
    #[must_use]
    pub fn registry(&self) -> &ProviderEndpointRegistry {
        &self.registry
    }

    fn api_key(&self, provider: &str) -> Result<String, BridgeError> {
        let key = api_key_var(provider);
        self.secrets
            .get(&key)
            .ok_or(BridgeError::MissingApiKey { key })
    }
}

#[async_trait]
impl DirectProvider for OpenAiCompatProvider {
    async fn call_direct(
        &self,
        provider: &str,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, BridgeError> {
        let url = self
            .registry
            .endpoint(provider)
            .ok_or_else(|| BridgeError::UnknownProvider(provider.to_string()))?;
        let api_key = self.api_key(provider)?;

        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_prompt),
            ],
            temperature: self.temperature,
            response_format: None,
        };

        let response = self
            .client
            .create_chat_completion(provider, url, &api_key, &request)
            .await?;

        response.into_first_content().ok_or_else(|| {
            BridgeError::InvalidResponse(format!(
                "{provider} response has no message content in its first choice"
            ))
        })
    }
}

impl core::fmt::Debug for OpenAiCompatProvider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OpenAiCompatProvider")
            .field("client", &self.client)
            .field("providers", &self.registry.provider_names())
            .field("temperature", &self.temperature)
            .finish()
    }
}
