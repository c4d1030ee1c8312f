//! Error taxonomy for the AI request bridge.

use crate::llm::GatewayError;

/// Errors surfaced by the bridge to capability call sites.
///
/// Messages are meant to be displayed verbatim: they name missing
/// configuration keys, providers and HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The requested provider has no entry in the endpoint registry.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    /// The API key for a provider is not configured.
    #[error("missing API key: set the {key} environment variable")]
    MissingApiKey {
        /// The configuration key that was expected.
        key: String,
    },

    /// A direct provider answered with a non-success HTTP status.
    #[error("{message}")]
    ProviderHttp {
        /// The provider that was called.
        provider: String,
        /// HTTP status code returned by the provider.
        status: u16,
        /// Best-effort message taken from the provider's error body.
        message: String,
    },

    /// Transport-level failure (connection refused, timeout, TLS, ...).
    #[error("http error: {0}")]
    Http(String),

    /// A successful response did not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The managed gateway returned no output.
    #[error("the model returned no output")]
    EmptyProviderOutput {
        /// The rescue attempt's failure, if one was made.
        suppressed: Option<Box<BridgeError>>,
    },

    /// A direct provider was requested without both prompts.
    #[error("provider '{provider}' requires both a system prompt and a user prompt")]
    MissingPromptParameters {
        /// The provider that was requested.
        provider: String,
    },

    /// The original managed gateway failure.
    ///
    /// When a rescue attempt was made and also failed, its error is kept in
    /// `suppressed` rather than replacing the gateway error.
    #[error("{error}")]
    Gateway {
        /// The gateway error, unchanged.
        #[source]
        error: GatewayError,
        /// The rescue attempt's failure, if one was made.
        suppressed: Option<Box<BridgeError>>,
    },

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl BridgeError {
    /// Returns the suppressed rescue error attached to a gateway failure.
    ///
    /// The rescue provider's failure never replaces the gateway's error; it is
    /// kept here for logging and diagnostics.
    #[must_use]
    pub fn suppressed(&self) -> Option<&BridgeError> {
        match self {
            Self::Gateway { suppressed, .. } | Self::EmptyProviderOutput { suppressed } => {
                suppressed.as_deref()
            }
            _ => None,
        }
    }

    /// Attaches a failed rescue attempt to a gateway failure.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_suppressed(self, rescue: BridgeError) -> Self {
        match self {
            Self::Gateway { error, .. } => Self::Gateway {
                error,
                suppressed: Some(Box::new(rescue)),
            },
            Self::EmptyProviderOutput { .. } => Self::EmptyProviderOutput {
                suppressed: Some(Box::new(rescue)),
            },
            other => other,
        }
    }

    /// Returns the HTTP status code associated with this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ProviderHttp { status, .. } => Some(*status),
            Self::Gateway { error, .. } => error.status,
            _ => None,
        }
    }
}

impl From<GatewayError> for BridgeError {
    fn from(error: GatewayError) -> Self {
        Self::Gateway {
            error,
            suppressed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_names_the_variable() {
        let err = BridgeError::MissingApiKey {
            key: "GROQ_API_KEY".to_string(),
        };
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn gateway_error_displays_original_message() {
        let err = BridgeError::from(GatewayError::new("429 Too Many Requests"));
        assert_eq!(err.to_string(), "429 Too Many Requests");
        assert!(err.suppressed().is_none());
    }

    #[test]
    fn with_suppressed_keeps_the_original_message() {
        let err = BridgeError::from(GatewayError::new("RESOURCE_EXHAUSTED"))
            .with_suppressed(BridgeError::MissingApiKey {
                key: "GROQ_API_KEY".to_string(),
            });
        assert_eq!(err.to_string(), "RESOURCE_EXHAUSTED");
        assert!(matches!(err.suppressed(), Some(BridgeError::MissingApiKey { .. })));
    }

    #[test]
    fn suppressed_error_is_reachable() {
        let err = BridgeError::Gateway {
            error: GatewayError::new("quota exceeded"),
            suppressed: Some(Box::new(BridgeError::UnknownProvider("acme".into()))),
        };
        assert!(matches!(
            err.suppressed(),
            Some(BridgeError::UnknownProvider(name)) if name == "acme"
        ));
    }
}
