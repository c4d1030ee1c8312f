//! Shared test helpers for provider tests.

#![allow(dead_code, reason = "helpers are shared between test binaries")]

use std::sync::{Arc, Once};

use scholar_model_providers::openai_compat::OpenAiCompatProvider;
use scholar_models::{ProviderEndpointRegistry, StaticSecrets};
use serde_json::{Value, json};
use wiremock::MockServer;

static INIT: Once = Once::new();

/// Initialize environment variables from `.env` file (once).
pub fn init_env() {
    INIT.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

/// Path the mock providers serve chat completions on.
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Builds a direct client whose `mock` provider points at `server`,
/// with `MOCK_API_KEY=test-key` configured.
pub fn mock_provider(server: &MockServer) -> OpenAiCompatProvider {
    let registry = ProviderEndpointRegistry::new()
        .with_endpoint("mock", format!("{}{COMPLETIONS_PATH}", server.uri()));
    let secrets = StaticSecrets::new().with("MOCK_API_KEY", "test-key");

    OpenAiCompatProvider::new(Arc::new(registry), Arc::new(secrets))
        .expect("client should build")
}

/// A chat-completions response body with a single choice.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}
