//! Emergency fallback after a throttled gateway call.

use scholar_models::BridgeError;
use scholar_models::llm::GatewayError;

/// Provider used for rescue attempts.
pub const RESCUE_PROVIDER: &str = "groq";

/// Model used for rescue attempts.
pub const RESCUE_MODEL: &str = "llama-3.3-70b-versatile";

/// The fixed provider/model pair tried once when the managed gateway is
/// rate limited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescuePolicy {
    /// Rescue provider identifier (must be in the endpoint registry).
    pub provider: String,
    /// Rescue model identifier.
    pub model: String,
    /// Whether an empty gateway output also triggers the rescue.
    pub rescue_on_empty_output: bool,
}

impl Default for RescuePolicy {
    fn default() -> Self {
        Self::new(RESCUE_PROVIDER, RESCUE_MODEL)
    }
}

impl RescuePolicy {
    /// Creates a policy for the given provider and model.
    #[must_use]
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            rescue_on_empty_output: false,
        }
    }

    /// Treats an empty gateway output as rescue-eligible.
    ///
    /// Off by default: an empty output is not reported as a throttle, so it
    /// normally fails the request.
    #[must_use]
    pub fn with_rescue_on_empty_output(mut self, enabled: bool) -> Self {
        self.rescue_on_empty_output = enabled;
        self
    }

    /// Whether `failure` warrants the rescue attempt.
    pub(crate) fn should_rescue(&self, failure: &GatewayFailure) -> bool {
        match failure {
            GatewayFailure::Empty => self.rescue_on_empty_output,
            GatewayFailure::Error(err) => err.is_rate_limited(),
        }
    }
}

/// How a gateway call failed.
#[derive(Debug)]
pub(crate) enum GatewayFailure {
    /// The call completed without output.
    Empty,
    /// The call returned an error.
    Error(GatewayError),
}

impl GatewayFailure {
    pub(crate) fn into_error(self) -> BridgeError {
        match self {
            Self::Empty => BridgeError::EmptyProviderOutput { suppressed: None },
            Self::Error(err) => BridgeError::from(err),
        }
    }
}
