//! Request types shared by the gateway and direct provider paths.

use serde::{Deserialize, Serialize};

// ─────────────────────
// Chat messages
// ─────────────────────

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions for the model.
    System,
    /// The end user's request.
    User,
}

/// A single chat message with plain text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who authored the message.
    pub role: Role,
    /// Text content.
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

// ─────────────────────
// Routing
// ─────────────────────

/// A provider/model pair a capability prefers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Provider identifier (the gateway identifier or a registry entry).
    pub provider: String,
    /// Model identifier, `None` for the provider's baseline.
    pub model: Option<String>,
}

impl Route {
    /// Creates a route with an explicit model.
    #[must_use]
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: Some(model.into()),
        }
    }

    /// Creates a route using the provider's baseline model.
    #[must_use]
    pub fn provider(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: None,
        }
    }
}

/// Options handed to a managed gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayOptions {
    /// Namespaced model identifier (e.g. `"googleai/gemini-2.0-flash"`).
    pub model: String,
}

// ─────────────────────
// Provider request
// ─────────────────────

/// One bridge request: capability input plus routing and rendered prompts.
///
/// # Example
///
/// ```rust
/// use scholar_models::llm::ProviderRequest;
///
/// let request = ProviderRequest::new("photosynthesis")
///     .provider("groq")
///     .model("llama-3.3-70b-versatile")
///     .prompts("You are a biology tutor.", "Explain photosynthesis.");
///
/// assert_eq!(request.preferred_provider.as_deref(), Some("groq"));
/// assert!(request.has_prompts());
/// ```
#[derive(Debug, Clone)]
pub struct ProviderRequest<I> {
    /// The capability's structured input.
    pub input: I,
    /// Requested provider. `None` means the managed gateway.
    pub preferred_provider: Option<String>,
    /// Requested model. `None` means the baseline model.
    pub preferred_model: Option<String>,
    /// Rendered system prompt.
    pub system_prompt: Option<String>,
    /// Rendered user prompt.
    pub user_prompt: Option<String>,
}

impl<I> ProviderRequest<I> {
    /// Creates a request routed to the managed gateway with no prompts.
    #[must_use]
    pub fn new(input: I) -> Self {
        Self {
            input,
            preferred_provider: None,
            preferred_model: None,
            system_prompt: None,
            user_prompt: None,
        }
    }

    /// Sets the preferred provider.
    #[must_use]
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.preferred_provider = Some(provider.into());
        self
    }

    /// Sets the preferred model.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.preferred_model = Some(model.into());
        self
    }

    /// Applies a [`Route`], replacing provider and model.
    #[must_use]
    pub fn route(mut self, route: Route) -> Self {
        self.preferred_provider = Some(route.provider);
        self.preferred_model = route.model;
        self
    }

    /// Sets the system prompt.
    #[must_use]
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Sets the user prompt.
    #[must_use]
    pub fn user_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.user_prompt = Some(prompt.into());
        self
    }

    /// Sets both prompts.
    #[must_use]
    pub fn prompts(self, system: impl Into<String>, user: impl Into<String>) -> Self {
        self.system_prompt(system).user_prompt(user)
    }

    /// Whether both prompts are present.
    #[must_use]
    pub fn has_prompts(&self) -> bool {
        self.system_prompt.is_some() && self.user_prompt.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_serialize_with_lowercase_roles() {
        let json = serde_json::to_value(ChatMessage::system("be brief")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "system", "content": "be brief"}));
    }

    #[test]
    fn outgoing_messages_use_request_roles_only() {
        let json = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(json["role"], "user");
        assert!(serde_json::from_str::<Role>("\"assistant\"").is_err());
    }

    #[test]
    fn new_request_targets_the_gateway() {
        let request = ProviderRequest::new(());
        assert!(request.preferred_provider.is_none());
        assert!(request.preferred_model.is_none());
        assert!(!request.has_prompts());
    }

    #[test]
    fn route_replaces_provider_and_model() {
        let request = ProviderRequest::new(())
            .model("old-model")
            .route(Route::provider("openai"));
        assert_eq!(request.preferred_provider.as_deref(), Some("openai"));
        assert!(request.preferred_model.is_none());
    }

    #[test]
    fn a_single_prompt_is_not_enough() {
        let request = ProviderRequest::new(()).system_prompt("system only");
        assert!(!request.has_prompts());
    }
}
