//! Step-by-step tutor.

use crate::capability::Capability;
use crate::normalizer::{NormalizationTier, SYNTHESIZED_STEP_TITLE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A student's question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorInput {
    /// Subject the question belongs to.
    pub subject: String,
    /// The question itself.
    pub question: String,
    /// Grade level used to pitch the explanation.
    #[serde(default)]
    pub grade_level: Option<String>,
}

/// One step of a worked solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TutorStep {
    /// Short step title.
    pub title: String,
    /// Step explanation.
    pub content: String,
}

/// The tutor's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TutorAnswer {
    /// Direct answer.
    pub answer: String,
    /// Worked steps.
    #[serde(default)]
    pub steps: Vec<TutorStep>,
    /// Related examples.
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Answers student questions with worked steps.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tutor;

impl Capability for Tutor {
    const ID: &'static str = "tutor";
    type Input = TutorInput;
    type Output = TutorAnswer;

    fn system_prompt(&self, input: &TutorInput) -> String {
        let audience = input
            .grade_level
            .as_deref()
            .map_or_else(|| "a student".to_string(), |grade| format!("a {grade} student"));
        format!(
            "You are a patient {subject} tutor helping {audience}. Explain step by step. \
             Respond with JSON: {{\"answer\": string, \"steps\": [{{\"title\": string, \"content\": string}}], \
             \"examples\": string[]}}.",
            subject = input.subject,
        )
    }

    fn user_prompt(&self, input: &TutorInput) -> String {
        input.question.clone()
    }

    fn synthesize(&self, text: &str, _tier: NormalizationTier) -> TutorAnswer {
        TutorAnswer {
            answer: text.to_string(),
            steps: vec![TutorStep {
                title: SYNTHESIZED_STEP_TITLE.to_string(),
                content: text.to_string(),
            }],
            examples: Vec::new(),
        }
    }
}
