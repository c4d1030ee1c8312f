//! Command-line arguments for the `study` binary.

use clap::{Parser, ValueEnum};
use scholar_core::TracingFormat;

/// Built-in capabilities selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CapabilityKind {
    /// Summarize study material.
    Summarize,
    /// Answer a question step by step.
    Tutor,
    /// Generate flashcards.
    Flashcards,
    /// Generate a quiz.
    Quiz,
    /// Rewrite text in a natural voice.
    Humanize,
    /// Send the text as a raw prompt.
    Freeform,
}

/// Parsed `study` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "study")]
#[command(about = "Run one study capability and print its output as JSON")]
pub struct StudyArgs {
    /// Capability to run.
    #[arg(value_enum)]
    pub capability: CapabilityKind,
    /// Text handed to the capability.
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
    /// Route to this direct provider instead of the managed gateway.
    #[arg(long)]
    pub provider: Option<String>,
    /// Model override.
    #[arg(long)]
    pub model: Option<String>,
    /// Log output format.
    #[arg(long, value_enum, default_value_t = TracingFormat::Compact)]
    pub log_format: TracingFormat,
}

impl StudyArgs {
    /// The positional words, space-joined.
    #[must_use]
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<StudyArgs, clap::Error> {
        StudyArgs::try_parse_from(core::iter::once("study").chain(args.iter().copied()))
    }

    #[test]
    fn parses_capability_and_text() {
        let args = parse(&["summarize", "Cells", "divide."]).unwrap();
        assert_eq!(args.capability, CapabilityKind::Summarize);
        assert_eq!(args.text(), "Cells divide.");
        assert!(args.provider.is_none());
        assert_eq!(args.log_format, TracingFormat::Compact);
    }

    #[test]
    fn parses_flags_anywhere() {
        let args = parse(&[
            "tutor",
            "--provider",
            "groq",
            "What is osmosis?",
            "--model",
            "llama-3.1-8b-instant",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.provider.as_deref(), Some("groq"));
        assert_eq!(args.model.as_deref(), Some("llama-3.1-8b-instant"));
        assert_eq!(args.log_format, TracingFormat::Json);
        assert_eq!(args.text(), "What is osmosis?");
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse(&[]).unwrap_err().kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(
            parse(&["quiz"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["translate", "hola"]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert!(parse(&["quiz", "cells", "--model"]).is_err());
        assert_eq!(
            parse(&["quiz", "--verbose", "cells"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse(&["quiz", "cells", "--log-format", "xml"]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
    }
}
