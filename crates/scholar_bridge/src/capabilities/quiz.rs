//! Multiple-choice quiz generator.

use crate::capability::Capability;
use crate::normalizer::NormalizationTier;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Quiz difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Recall questions.
    Easy,
    /// Application questions.
    #[default]
    Medium,
    /// Analysis questions.
    Hard,
}

/// What the quiz should cover.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizInput {
    /// Topic to quiz on.
    pub topic: String,
    /// Number of questions.
    pub question_count: u8,
    /// Difficulty.
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// One quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuizQuestion {
    /// Question text.
    pub question: String,
    /// Answer options.
    #[serde(default)]
    pub options: Vec<String>,
    /// The correct option.
    #[serde(default)]
    pub answer: String,
    /// Why the answer is correct.
    #[serde(default)]
    pub explanation: String,
}

/// A generated quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuizSet {
    /// The questions.
    pub questions: Vec<QuizQuestion>,
}

/// Generates quizzes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Quiz;

impl Capability for Quiz {
    const ID: &'static str = "quiz";
    type Input = QuizInput;
    type Output = QuizSet;

    fn system_prompt(&self, input: &QuizInput) -> String {
        let difficulty = match input.difficulty {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        format!(
            "You write {difficulty} multiple-choice quizzes with four options each. \
             Respond with JSON: {{\"questions\": [{{\"question\": string, \"options\": string[], \
             \"answer\": string, \"explanation\": string}}]}}."
        )
    }

    fn user_prompt(&self, input: &QuizInput) -> String {
        format!(
            "Write {} questions about {}.",
            input.question_count, input.topic
        )
    }

    /// Prose cannot be split into questions. The full tier keeps the text as a
    /// single stub question; the reduced tier returns an empty quiz.
    fn synthesize(&self, text: &str, tier: NormalizationTier) -> QuizSet {
        let questions = match tier {
            NormalizationTier::Full => vec![QuizQuestion {
                question: text.to_string(),
                options: Vec::new(),
                answer: String::new(),
                explanation: String::new(),
            }],
            NormalizationTier::Reduced => Vec::new(),
        };
        QuizSet { questions }
    }
}
