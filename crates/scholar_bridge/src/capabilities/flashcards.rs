//! Flashcard generator.

use crate::capability::Capability;
use crate::normalizer::{NormalizationTier, SYNTHESIZED_CARD_FRONT};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Material to turn into flashcards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardsInput {
    /// Topic label.
    pub topic: String,
    /// Notes the cards are drawn from.
    pub notes: String,
    /// Number of cards wanted.
    pub count: u8,
}

/// A single flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Flashcard {
    /// Prompt side.
    pub front: String,
    /// Answer side.
    pub back: String,
}

/// A deck of flashcards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FlashcardDeck {
    /// The cards.
    pub cards: Vec<Flashcard>,
}

/// Generates flashcards from notes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Flashcards;

impl Capability for Flashcards {
    const ID: &'static str = "flashcards";
    type Input = FlashcardsInput;
    type Output = FlashcardDeck;

    fn system_prompt(&self, input: &FlashcardsInput) -> String {
        format!(
            "You write concise study flashcards about {}. Create exactly {} cards. \
             Respond with JSON: {{\"cards\": [{{\"front\": string, \"back\": string}}]}}.",
            input.topic, input.count
        )
    }

    fn user_prompt(&self, input: &FlashcardsInput) -> String {
        format!("Notes:\n\n{}", input.notes)
    }

    fn synthesize(&self, text: &str, _tier: NormalizationTier) -> FlashcardDeck {
        FlashcardDeck {
            cards: vec![Flashcard {
                front: SYNTHESIZED_CARD_FRONT.to_string(),
                back: text.to_string(),
            }],
        }
    }
}
