//! Built-in capabilities.

mod flashcards;
mod freeform;
mod humanize;
mod quiz;
mod summarize;
mod tutor;

pub use flashcards::{Flashcard, FlashcardDeck, Flashcards, FlashcardsInput};
pub use freeform::{Freeform, FreeformPrompt};
pub use humanize::{Humanize, HumanizeInput, HumanizedText};
pub use quiz::{Difficulty, Quiz, QuizInput, QuizQuestion, QuizSet};
pub use summarize::{Summarize, SummarizeInput, Summary, SummaryLength};
pub use tutor::{Tutor, TutorAnswer, TutorInput, TutorStep};

use crate::capability::CapabilityRegistry;

/// Returns a registry holding every built-in capability.
#[must_use]
pub fn builtin_registry() -> CapabilityRegistry {
    CapabilityRegistry::new()
        .with(Summarize)
        .with(Tutor)
        .with(Flashcards)
        .with(Quiz)
        .with(Humanize)
        .with(Freeform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::NormalizationTier;
    use serde_json::json;

    #[test]
    fn builtin_registry_lists_all_capabilities() {
        assert_eq!(
            builtin_registry().ids(),
            vec!["flashcards", "freeform", "humanize", "quiz", "summarize", "tutor"]
        );
    }

    #[test]
    fn registry_uses_capability_adapter() {
        let registry = builtin_registry();
        let deck = registry.normalize("flashcards", "Mitosis has four phases.", NormalizationTier::Full);
        assert_eq!(
            deck,
            json!({ "cards": [{ "front": "Generated content", "back": "Mitosis has four phases." }] })
        );
    }

    #[test]
    fn registry_keeps_matching_json() {
        let registry = builtin_registry();
        let value = registry.normalize(
            "humanize",
            "```json\n{\"humanizedText\": \"hey there\"}\n```",
            NormalizationTier::Full,
        );
        assert_eq!(value, json!({ "humanizedText": "hey there" }));
    }

    #[test]
    fn unknown_capability_falls_back_to_superset() {
        let value = builtin_registry().normalize("translate", "bonjour", NormalizationTier::Full);
        assert_eq!(value["translation"], "bonjour");
        assert_eq!(value["answer"], "bonjour");
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn duplicate_registration_panics() {
        let _ = CapabilityRegistry::new().with(Quiz).with(Quiz);
    }
}
