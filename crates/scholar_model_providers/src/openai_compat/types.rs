//! OpenAI chat-completions wire types.
//!
//! Only the subset the bridge sends and reads is modelled.
//! See: <https://platform.openai.com/docs/api-reference/chat/create>

use scholar_models::llm::ChatMessage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─────────────────────────────────────────────────────────────────────────────
// Request Types
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for the chat-completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// The model to use.
    pub model: String,
    /// Conversation, `system` first then `user`.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: f64,
    /// Structured output format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// Requested response format.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Output must validate against a JSON schema.
    JsonSchema {
        /// The schema definition.
        json_schema: JsonSchemaFormat,
    },
}

/// JSON schema response format body.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSchemaFormat {
    /// Schema name.
    pub name: String,
    /// The JSON schema.
    pub schema: Value,
    /// Whether strict schema adherence is required.
    pub strict: bool,
}

impl ResponseFormat {
    /// Creates a strict JSON schema format.
    pub fn json_schema(schema: Value) -> Self {
        Self::JsonSchema {
            json_schema: JsonSchemaFormat {
                name: "structured_output".to_string(),
                schema,
                strict: true,
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// Successful chat-completions response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Generated completions.
    pub choices: Vec<Choice>,
}

/// One completion.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The assistant message.
    pub message: AssistantMessage,
}

/// Assistant message of a completion.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    /// Text content. Absent for tool-call-only replies.
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Returns the first completion's message content.
    pub fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorBody,
}

/// Error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_without_response_format_by_default() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hi")],
            temperature: 0.7,
            response_format: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ],
                "temperature": 0.7
            })
        );
    }

    #[test]
    fn json_schema_format_is_tagged() {
        let format = ResponseFormat::json_schema(json!({"type": "object"}));
        let value = serde_json::to_value(&format).unwrap();
        assert_eq!(value["type"], "json_schema");
        assert_eq!(value["json_schema"]["name"], "structured_output");
        assert_eq!(value["json_schema"]["strict"], true);
    }

    #[test]
    fn first_content_is_extracted() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "first"}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ]
        }))
        .unwrap();
        assert_eq!(response.into_first_content().as_deref(), Some("first"));
    }

    #[test]
    fn empty_choices_have_no_content() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({"choices": []})).unwrap();
        assert!(response.into_first_content().is_none());
    }
}
