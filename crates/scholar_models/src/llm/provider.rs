//! The [`DirectProvider`] trait for OpenAI-compatible backends.

use crate::error::BridgeError;
use async_trait::async_trait;

/// Trait implemented by backends that answer a single system/user exchange
/// with free text.
///
/// The orchestrator reaches every non-gateway provider, including the rescue
/// provider, through this trait.
#[async_trait]
pub trait DirectProvider: Send + Sync + 'static {
    /// Sends one chat-completion request and returns the first completion's text.
    ///
    /// # Arguments
    ///
    /// * `provider` - Provider identifier, looked up in the endpoint registry
    /// * `model` - Model identifier understood by that provider
    /// * `system_prompt` - Content of the `system` message
    /// * `user_prompt` - Content of the `user` message
    async fn call_direct(
        &self,
        provider: &str,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, BridgeError>;
}
