//! Reshaping free-text provider replies into capability outputs.
//!
//! Direct providers are called without structured-output support, so their
//! reply is either JSON (when the system prompt asked for it and the model
//! complied) or prose. JSON is used as-is; prose is wrapped into a value
//! satisfying the expected output contract.
//!
//! Two synthesis tiers exist:
//!
//! | Tier | Used for | Text keys | Array keys |
//! |------|----------|-----------|------------|
//! | [`Full`](NormalizationTier::Full) | direct-provider fallback | `answer`, `summary`, `humanizedText`, `content`, `analysis`, `solution`, `definition`, `explanation`, `feedback`, `text`, `translation` | `cards`, `steps`, `sections`, `questions`, `keyPoints`, `examples`, `suggestions` |
//! | [`Reduced`](NormalizationTier::Reduced) | rescue fallback | `answer`, `summary`, `humanizedText`, `content` | `cards`, `steps`, `keyPoints` |
//!
//! Normalization never fails and is deterministic.

use crate::capability::Capability;
use serde_json::{Map, Value, json};

/// Which key set synthesis populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizationTier {
    /// Widest key set, used on the primary direct-provider path.
    Full,
    /// Smaller key set, used for rescue-provider replies.
    Reduced,
}

/// Text keys populated with the raw reply at the full tier.
pub const FULL_TEXT_KEYS: &[&str] = &[
    "answer",
    "summary",
    "humanizedText",
    "content",
    "analysis",
    "solution",
    "definition",
    "explanation",
    "feedback",
    "text",
    "translation",
];

/// Text keys populated with the raw reply at the reduced tier.
pub const REDUCED_TEXT_KEYS: &[&str] = &["answer", "summary", "humanizedText", "content"];

/// Front side of a synthesized flashcard.
pub const SYNTHESIZED_CARD_FRONT: &str = "Generated content";

/// Title of a synthesized solution step.
pub const SYNTHESIZED_STEP_TITLE: &str = "Solution";

/// Heading of a synthesized report section.
pub const SYNTHESIZED_SECTION_HEADING: &str = "Report";

/// Removes Markdown code-fence markers and surrounding whitespace.
///
/// ```
/// use scholar_bridge::normalizer::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(strip_code_fences("  plain text \n"), "plain text");
/// ```
#[must_use]
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parses `text` as JSON if it looks like an object or array.
fn parse_json_shaped(text: &str) -> Option<Value> {
    if !looks_like_json(text) {
        return None;
    }
    serde_json::from_str(text).ok()
}

fn looks_like_json(text: &str) -> bool {
    text.starts_with('{') || text.starts_with('[')
}

/// Normalizes a raw reply without knowing the expected output shape.
///
/// Returns the parsed JSON when the cleaned reply is a JSON object or array,
/// otherwise the superset object for `tier` (see [`synthesize_superset`]).
///
/// ```
/// use scholar_bridge::normalizer::{NormalizationTier, normalize};
/// use serde_json::json;
///
/// let parsed = normalize("```json\n{\"summary\":\"x\"}\n```", NormalizationTier::Full);
/// assert_eq!(parsed, json!({"summary": "x"}));
///
/// let synthesized = normalize("hello world", NormalizationTier::Full);
/// assert_eq!(synthesized["answer"], "hello world");
/// assert_eq!(synthesized["content"], "hello world");
/// ```
#[must_use]
pub fn normalize(raw: &str, tier: NormalizationTier) -> Value {
    let cleaned = strip_code_fences(raw);
    parse_json_shaped(&cleaned).unwrap_or_else(|| synthesize_superset(&cleaned, tier))
}

/// Normalizes a raw reply into a capability's output type.
///
/// JSON that deserializes into `C::Output` wins. Anything else is handed to
/// the capability's own [`synthesize`](Capability::synthesize) adapter.
pub fn normalize_into<C: Capability>(capability: &C, raw: &str, tier: NormalizationTier) -> C::Output {
    let cleaned = strip_code_fences(raw);

    if looks_like_json(&cleaned) {
        match serde_json::from_str::<C::Output>(&cleaned) {
            Ok(output) => return output,
            Err(err) => tracing::debug!(
                capability = C::ID,
                error = %err,
                "JSON reply does not match the output contract, synthesizing"
            ),
        }
    }

    capability.synthesize(&cleaned, tier)
}

/// Builds the superset object for `text`.
///
/// Every text key of the tier holds `text`; every array key holds a minimal
/// sequence derived from it, so capabilities iterating over an array never
/// see `null`.
#[must_use]
pub fn synthesize_superset(text: &str, tier: NormalizationTier) -> Value {
    let text_keys = match tier {
        NormalizationTier::Full => FULL_TEXT_KEYS,
        NormalizationTier::Reduced => REDUCED_TEXT_KEYS,
    };

    let mut object: Map<String, Value> = text_keys
        .iter()
        .map(|key| ((*key).to_string(), Value::String(text.to_string())))
        .collect();

    object.insert("cards".to_string(), json!([synthesized_card(text)]));
    object.insert("steps".to_string(), json!([synthesized_step(text)]));
    object.insert("keyPoints".to_string(), json!([text]));

    if tier == NormalizationTier::Full {
        object.insert(
            "sections".to_string(),
            json!([{ "heading": SYNTHESIZED_SECTION_HEADING, "content": text }]),
        );
        object.insert("questions".to_string(), json!([synthesized_question(text)]));
        object.insert("examples".to_string(), json!([]));
        object.insert("suggestions".to_string(), json!([]));
    }

    Value::Object(object)
}

fn synthesized_card(text: &str) -> Value {
    json!({ "front": SYNTHESIZED_CARD_FRONT, "back": text })
}

fn synthesized_step(text: &str) -> Value {
    json!({ "title": SYNTHESIZED_STEP_TITLE, "content": text })
}

fn synthesized_question(text: &str) -> Value {
    json!({ "question": text, "options": [], "answer": "", "explanation": "" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fences_are_removed_anywhere() {
        assert_eq!(
            strip_code_fences("Here you go:\n```json\n[1, 2]\n```\n"),
            "Here you go:\n\n[1, 2]"
        );
    }

    #[test]
    fn json_object_is_returned_as_is() {
        assert_eq!(
            normalize("{\"summary\":\"x\"}", NormalizationTier::Full),
            json!({ "summary": "x" })
        );
    }

    #[test]
    fn json_array_is_returned_as_is() {
        assert_eq!(
            normalize("```\n[{\"front\":\"a\",\"back\":\"b\"}]\n```", NormalizationTier::Reduced),
            json!([{ "front": "a", "back": "b" }])
        );
    }

    #[test]
    fn broken_json_is_synthesized() {
        let value = normalize("{\"summary\": ", NormalizationTier::Full);
        assert_eq!(value["summary"], "{\"summary\":");
    }

    #[test]
    fn prose_populates_every_full_text_key() {
        let value = normalize("hello world", NormalizationTier::Full);
        for key in FULL_TEXT_KEYS {
            assert_eq!(value[*key], "hello world", "key {key}");
        }
        for key in ["cards", "steps", "sections", "questions", "keyPoints", "examples", "suggestions"] {
            assert!(value[key].is_array(), "key {key} should be an array");
        }
        assert_eq!(value["cards"][0]["back"], "hello world");
        assert_eq!(value["steps"][0]["content"], "hello world");
        assert_eq!(value["questions"][0]["question"], "hello world");
    }

    #[test]
    fn reduced_tier_populates_fewer_keys() {
        let value = normalize("hello world", NormalizationTier::Reduced);
        let object = value.as_object().expect("object");

        for key in REDUCED_TEXT_KEYS {
            assert_eq!(object[*key], "hello world");
        }
        assert!(object["cards"].is_array());
        assert!(object["steps"].is_array());
        assert!(object["keyPoints"].is_array());
        assert!(!object.contains_key("analysis"));
        assert!(!object.contains_key("questions"));
        assert_eq!(object.len(), REDUCED_TEXT_KEYS.len() + 3);
    }

    #[test]
    fn normalization_is_deterministic() {
        for tier in [NormalizationTier::Full, NormalizationTier::Reduced] {
            assert_eq!(
                normalize("The mitochondria is the powerhouse.", tier),
                normalize("The mitochondria is the powerhouse.", tier)
            );
        }
    }

    #[test]
    fn empty_reply_still_yields_an_object() {
        let value = normalize("   ", NormalizationTier::Full);
        assert_eq!(value["answer"], "");
        assert!(value["cards"].is_array());
    }
}
