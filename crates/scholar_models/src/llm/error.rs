//! Error type for managed gateway calls.

/// Message fragments that mark a rate-limit, quota or overload failure.
pub const RATE_LIMIT_MARKERS: &[&str] = &["429", "quota", "RESOURCE_EXHAUSTED", "503"];

/// Failure reported by a managed gateway call.
///
/// Gateways are supplied by capabilities, so this type only carries what the
/// orchestrator needs: a diagnostic message, an optional HTTP status and the
/// underlying cause.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct GatewayError {
    /// Human-readable message, shown to users as-is.
    pub message: String,
    /// HTTP status code if the gateway reported one.
    pub status: Option<u16>,
    /// The underlying error source.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GatewayError {
    /// Creates an error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Attaches an HTTP status code.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attaches the underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Whether the message indicates a rate-limit, quota or overload condition.
    ///
    /// Matching is on the message text so that gateways which only surface a
    /// string (`"RESOURCE_EXHAUSTED: ..."`, `"[429 Too Many Requests]"`) are
    /// classified the same way as those reporting a status code.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        RATE_LIMIT_MARKERS
            .iter()
            .any(|marker| self.message.contains(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_markers_are_detected() {
        for message in [
            "[429 Too Many Requests] slow down",
            "You exceeded your current quota",
            "RESOURCE_EXHAUSTED: try later",
            "503 Service Unavailable",
        ] {
            assert!(
                GatewayError::new(message).is_rate_limited(),
                "should classify as rate limited: {message}"
            );
        }
    }

    #[test]
    fn other_errors_are_not_rate_limited() {
        assert!(!GatewayError::new("invalid argument: schema mismatch").is_rate_limited());
        assert!(!GatewayError::new("401 Unauthorized").is_rate_limited());
    }
}
