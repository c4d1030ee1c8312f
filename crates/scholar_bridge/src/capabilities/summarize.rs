//! Study-note summarizer.

use crate::capability::Capability;
use crate::normalizer::NormalizationTier;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How long the summary should be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    /// A couple of sentences.
    Short,
    /// One paragraph.
    #[default]
    Medium,
    /// Several paragraphs.
    Detailed,
}

/// Text to summarize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeInput {
    /// Source material.
    pub text: String,
    /// Desired length.
    #[serde(default)]
    pub length: SummaryLength,
}

/// A summary with its key points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The summary text.
    pub summary: String,
    /// Bullet-point takeaways.
    #[serde(default)]
    pub key_points: Vec<String>,
}

/// Summarizes study material.
#[derive(Debug, Default, Clone, Copy)]
pub struct Summarize;

impl Capability for Summarize {
    const ID: &'static str = "summarize";
    type Input = SummarizeInput;
    type Output = Summary;

    fn system_prompt(&self, input: &SummarizeInput) -> String {
        let length = match input.length {
            SummaryLength::Short => "two or three sentences",
            SummaryLength::Medium => "one paragraph",
            SummaryLength::Detailed => "several paragraphs",
        };
        format!(
            "You summarize study material for students in {length}. \
             Respond with JSON: {{\"summary\": string, \"keyPoints\": string[]}}."
        )
    }

    fn user_prompt(&self, input: &SummarizeInput) -> String {
        format!("Summarize the following text:\n\n{}", input.text)
    }

    fn synthesize(&self, text: &str, _tier: NormalizationTier) -> Summary {
        Summary {
            summary: text.to_string(),
            key_points: vec![text.to_string()],
        }
    }
}
