//! Structured gateway tests against a local mock server.

#![cfg(feature = "gateway")]

mod common;

use common::{COMPLETIONS_PATH, completion_body};
use schemars::JsonSchema;
use scholar_model_providers::gateway::StructuredGateway;
use scholar_models::StaticSecrets;
use scholar_models::llm::{GatewayOptions, GatewaySettings};
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
struct Summary {
    summary: String,
}

fn gateway(server: &MockServer) -> StructuredGateway {
    let secrets = StaticSecrets::new().with("GOOGLE_API_KEY", "google-key");
    StructuredGateway::new(GatewaySettings::default(), &secrets)
        .expect("gateway should build")
        .with_endpoint(format!("{}{COMPLETIONS_PATH}", server.uri()))
}

fn options() -> GatewayOptions {
    GatewayOptions {
        model: "googleai/gemini-2.0-flash".to_string(),
    }
}

#[tokio::test]
async fn structured_output_is_deserialized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("authorization", "Bearer google-key"))
        .and(body_partial_json(json!({
            "model": "gemini-2.0-flash",
            "response_format": { "type": "json_schema" }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body(r#"{"summary":"Cells make energy."}"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output: Option<Summary> = gateway(&server)
        .generate(&options(), Some("Summarize."), "Mitochondria...")
        .await
        .expect("generation should succeed");

    assert_eq!(
        output,
        Some(Summary {
            summary: "Cells make energy.".to_string()
        })
    );
}

#[tokio::test]
async fn blank_content_is_no_output() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("  ")))
        .mount(&server)
        .await;

    let output: Option<Summary> = gateway(&server)
        .generate(&options(), None, "Mitochondria...")
        .await
        .expect("generation should succeed");

    assert!(output.is_none());
}

#[tokio::test]
async fn rate_limit_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "Resource has been exhausted (e.g. check quota)." }
        })))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .generate::<Summary>(&options(), None, "Mitochondria...")
        .await
        .unwrap_err();

    assert_eq!(err.status, Some(429));
    assert!(err.message.starts_with("[429]"), "message: {}", err.message);
    assert!(err.is_rate_limited());
}

#[tokio::test]
async fn schema_mismatch_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(r#"{"title":"x"}"#)))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .generate::<Summary>(&options(), None, "Mitochondria...")
        .await
        .unwrap_err();

    assert!(!err.is_rate_limited());
    assert!(err.message.contains("does not match the schema"));
}
