//! Chat-completions HTTP client.

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ErrorResponse};
use core::time::Duration;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use scholar_models::BridgeError;

/// Default bound on one request/response cycle.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for OpenAI-compatible chat-completions endpoints.
///
/// One instance is shared by every provider so connections are pooled.
#[derive(Clone)]
pub struct ChatCompletionsClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl ChatCompletionsClient {
    /// Creates a client whose requests are bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Configuration`] if the timeout is zero or the
    /// underlying HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, BridgeError> {
        if timeout.is_zero() {
            return Err(BridgeError::Configuration(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| {
                BridgeError::Configuration(format!("failed to build HTTP client: {err}"))
            })?;

        Ok(Self { client, timeout })
    }

    /// Returns the configured request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends a chat-completions request.
    ///
    /// `provider` is only used to label errors.
    pub async fn create_chat_completion(
        &self,
        provider: &str,
        url: &str,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, BridgeError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|err| {
                BridgeError::Configuration(format!("invalid API key header: {err}"))
            })?,
        );

        tracing::debug!(provider, url, model = %request.model, "sending chat completion");

        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|err| BridgeError::Http(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| BridgeError::Http(err.to_string()))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(parsed) => parsed.error.message,
                Err(_) => format!(
                    "{provider} request failed with status {}",
                    status.as_u16()
                ),
            };

            tracing::warn!(provider, status = status.as_u16(), %message, "provider returned an error");

            return Err(BridgeError::ProviderHttp {
                provider: provider.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|err| {
            BridgeError::InvalidResponse(format!(
                "Failed to parse {provider} response: {err}\nBody: {body}"
            ))
        })
    }
}

impl core::fmt::Debug for ChatCompletionsClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChatCompletionsClient")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_is_rejected() {
        let err = ChatCompletionsClient::new(Duration::ZERO).unwrap_err();
        assert!(matches!(err, BridgeError::Configuration(_)));
    }

    #[test]
    fn timeout_is_kept() {
        let client = ChatCompletionsClient::new(Duration::from_secs(5)).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }
}
