//! Live tests for the direct provider client against Groq.
//!
//! These tests are ignored by default because they require:
//! - `GROQ_API_KEY` environment variable (or in `.env` file)
//! - Network access to the Groq API
//! - May incur API costs
//!
//! To run these tests:
//! ```sh
//! cargo test -p scholar_model_providers --test groq_integration -- --ignored
//! ```

mod common;

use std::sync::Arc;

use common::init_env;
use scholar_model_providers::openai_compat::OpenAiCompatProvider;
use scholar_models::llm::DirectProvider;
use scholar_models::{BridgeError, ProviderEndpointRegistry};

const MODEL: &str = "llama-3.3-70b-versatile";

fn provider() -> OpenAiCompatProvider {
    init_env();
    OpenAiCompatProvider::from_env(Arc::new(ProviderEndpointRegistry::with_defaults()))
        .expect("client should build")
}

#[tokio::test]
#[ignore = "requires GROQ_API_KEY"]
async fn test_basic_completion() {
    let text = provider()
        .call_direct(
            "groq",
            MODEL,
            "You answer with a single word.",
            "Say 'hello' and nothing else.",
        )
        .await
        .expect("completion should succeed");

    assert!(
        text.to_lowercase().contains("hello"),
        "response should contain 'hello': {text}"
    );
}

#[tokio::test]
#[ignore = "requires GROQ_API_KEY"]
async fn test_invalid_model_error() {
    let err = provider()
        .call_direct("groq", "not-a-real-model", "system", "Hello")
        .await
        .unwrap_err();

    assert!(
        matches!(err, BridgeError::ProviderHttp { status, .. } if status == 404 || status == 400),
        "should fail with a provider error: {err:?}"
    );
}
