//! Structured-output managed gateway.

use crate::openai_compat::types::{ChatCompletionRequest, ResponseFormat};
use crate::openai_compat::{ChatCompletionsClient, DEFAULT_REQUEST_TIMEOUT};
use crate::schema::prepare_gateway_schema;
use core::time::Duration;
use schemars::{JsonSchema, schema_for};
use scholar_models::llm::{ChatMessage, GatewayError, GatewayOptions, GatewaySettings};
use scholar_models::{BridgeError, SecretSource, api_key_var};
use serde::de::DeserializeOwned;

/// Google's OpenAI-compatible chat-completions endpoint.
pub const GOOGLE_GATEWAY_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions";

/// Temperature used for structured generation.
const STRUCTURED_TEMPERATURE: f64 = 0.4;

/// Managed gateway with native structured output.
///
/// Each call derives the JSON schema of the requested output type with
/// `schemars`, asks the model for output conforming to it and deserializes
/// the reply. A reply without content is reported as `Ok(None)`, the
/// gateway's "no output" signal.
#[derive(Clone)]
pub struct StructuredGateway {
    client: ChatCompletionsClient,
    api_key: String,
    endpoint: String,
    settings: GatewaySettings,
}

impl StructuredGateway {
    /// Creates a gateway for Google's endpoint, reading `GOOGLE_API_KEY`
    /// from `secrets`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::MissingApiKey`] if the key is not configured.
    pub fn new(settings: GatewaySettings, secrets: &dyn SecretSource) -> Result<Self, BridgeError> {
        let key = api_key_var(&settings.provider);
        let api_key = secrets
            .get(&key)
            .ok_or(BridgeError::MissingApiKey { key })?;

        Ok(Self {
            client: ChatCompletionsClient::new(DEFAULT_REQUEST_TIMEOUT)?,
            api_key,
            endpoint: GOOGLE_GATEWAY_URL.to_string(),
            settings,
        })
    }

    /// Overrides the endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
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

    /// Generates a value of type `T`.
    ///
    /// `options.model` may carry the gateway namespace; it is stripped before
    /// the request is sent.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] whose message starts with the HTTP status
    /// in brackets (e.g. `"[429] Resource has been exhausted"`) when the
    /// gateway rejects the request, or describes why the reply could not be
    /// used.
    pub async fn generate<T: JsonSchema + DeserializeOwned>(
        &self,
        options: &GatewayOptions,
        system_prompt: Option<&str>,
        user_prompt: &str,
    ) -> Result<Option<T>, GatewayError> {
        let schema = serde_json::to_value(schema_for!(T)).map_err(|err| {
            GatewayError::new(format!("failed to serialize output schema: {err}")).with_source(err)
        })?;

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_prompt {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(user_prompt));

        let request = ChatCompletionRequest {
            model: self.settings.bare_model(&options.model).to_string(),
            messages,
            temperature: STRUCTURED_TEMPERATURE,
            response_format: Some(ResponseFormat::json_schema(prepare_gateway_schema(schema))),
        };

        let response = self
            .client
            .create_chat_completion(&self.settings.provider, &self.endpoint, &self.api_key, &request)
            .await
            .map_err(into_gateway_error)?;

        let Some(text) = response
            .into_first_content()
            .filter(|text| !text.trim().is_empty())
        else {
            tracing::debug!(model = %options.model, "gateway returned no content");
            return Ok(None);
        };

        serde_json::from_str(&text).map(Some).map_err(|err| {
            GatewayError::new(format!("gateway output does not match the schema: {err}"))
                .with_source(err)
        })
    }
}

fn into_gateway_error(err: BridgeError) -> GatewayError {
    match err {
        BridgeError::ProviderHttp {
            status, message, ..
        } => GatewayError::new(format!("[{status}] {message}")).with_status(status),
        other => GatewayError::new(other.to_string()).with_source(other),
    }
}

impl core::fmt::Debug for StructuredGateway {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StructuredGateway")
            .field("endpoint", &self.endpoint)
            .field("settings", &self.settings)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
