//! Example study assistant built with Scholar.
//!
//! Runs one built-in capability through the fallback orchestrator and prints
//! its output as JSON.
//!
//! ```text
//! ┌──────────┐   ┌──────────────┐   ┌──────────────────┐
//! │ StudyArgs│──▶│ Orchestrator │──▶│ managed gateway  │
//! └──────────┘   └──────┬───────┘   └────────┬─────────┘
//!                       │ provider set       │ rate limited
//!                       ▼                    ▼
//!               ┌────────────────┐   ┌────────────────┐
//!               │ direct provider│   │ rescue provider│
//!               └────────────────┘   └────────────────┘
//! ```

mod args;

pub use args::{CapabilityKind, StudyArgs};

use scholar_bridge::capabilities::{
    Flashcards, FlashcardsInput, Freeform, FreeformPrompt, Humanize, HumanizeInput, Quiz,
    QuizInput, Summarize, SummarizeInput, Tutor, TutorInput,
};
use scholar_bridge::orchestrator::prepare_request;
use scholar_bridge::{BridgeConfig, Capability, Orchestrator};
use scholar_model_providers::StructuredGateway;
use scholar_models::llm::GatewayError;
use scholar_models::{BridgeError, SecretSource};
use serde_json::Value;
use std::io::{self, Write};
use std::sync::Arc;

const FREEFORM_SYSTEM_PROMPT: &str = "You are a helpful study assistant.";
const DEFAULT_CARD_COUNT: u8 = 5;
const DEFAULT_QUESTION_COUNT: u8 = 5;

/// The orchestrator plus the managed gateway, if one is configured.
#[derive(Debug)]
pub struct Study {
    orchestrator: Orchestrator,
    gateway: Option<StructuredGateway>,
}

impl Study {
    /// Builds the assistant from configuration and secrets.
    ///
    /// A missing `GOOGLE_API_KEY` disables the managed gateway instead of
    /// failing, so direct providers stay usable.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub fn from_config(
        config: &BridgeConfig,
        secrets: Arc<dyn SecretSource>,
    ) -> Result<Self, BridgeError> {
        let gateway = match StructuredGateway::new(config.gateway.clone(), secrets.as_ref()) {
            Ok(gateway) => Some(gateway.with_timeout(config.request_timeout)?),
            Err(err) => {
                tracing::warn!(error = %err, "managed gateway disabled");
                None
            }
        };

        Ok(Self {
            orchestrator: config.build_orchestrator(secrets)?,
            gateway,
        })
    }

    /// Creates an assistant from parts.
    #[must_use]
    pub fn new(orchestrator: Orchestrator, gateway: Option<StructuredGateway>) -> Self {
        Self {
            orchestrator,
            gateway,
        }
    }

    /// Runs the capability named in `args` and returns its output as JSON.
    ///
    /// # Errors
    ///
    /// Returns the orchestrator's error unchanged.
    pub async fn run(&self, args: &StudyArgs) -> Result<Value, BridgeError> {
        let text = args.text();
        match args.capability {
            CapabilityKind::Summarize => {
                let input = SummarizeInput {
                    text,
                    length: Default::default(),
                };
                self.dispatch(&Summarize, input, args).await
            }
            CapabilityKind::Tutor => {
                let input = TutorInput {
                    subject: "general".to_string(),
                    question: text,
                    grade_level: None,
                };
                self.dispatch(&Tutor, input, args).await
            }
            CapabilityKind::Flashcards => {
                let input = FlashcardsInput {
                    topic: text,
                    notes: String::new(),
                    count: DEFAULT_CARD_COUNT,
                };
                self.dispatch(&Flashcards, input, args).await
            }
            CapabilityKind::Quiz => {
                let input = QuizInput {
                    topic: text,
                    question_count: DEFAULT_QUESTION_COUNT,
                    difficulty: Default::default(),
                };
                self.dispatch(&Quiz, input, args).await
            }
            CapabilityKind::Humanize => {
                self.dispatch(&Humanize, HumanizeInput { text }, args).await
            }
            CapabilityKind::Freeform => {
                let input = FreeformPrompt::new(FREEFORM_SYSTEM_PROMPT, text);
                self.dispatch(&Freeform, input, args).await
            }
        }
    }

    async fn dispatch<C: Capability>(
        &self,
        capability: &C,
        input: C::Input,
        args: &StudyArgs,
    ) -> Result<Value, BridgeError> {
        let mut request = prepare_request(capability, input);
        if let Some(provider) = &args.provider {
            request = request.provider(provider.clone());
            request.preferred_model = args.model.clone();
        } else if let Some(model) = &args.model {
            request = request.model(model.clone());
        }

        tracing::info!(
            capability = C::ID,
            provider = request.preferred_provider.as_deref().unwrap_or_default(),
            "running capability"
        );

        let output = match &self.gateway {
            Some(gateway) => {
                self.orchestrator
                    .execute_structured(capability, request, gateway)
                    .await?
            }
            None => {
                self.orchestrator
                    .execute(capability, request, |_input, _options| async {
                        Err(GatewayError::new(
                            "managed gateway is not configured: set the GOOGLE_API_KEY environment variable",
                        ))
                    })
                    .await?
            }
        };

        serde_json::to_value(output).map_err(|err| BridgeError::InvalidResponse(err.to_string()))
    }
}

/// Writes the outcome of a run and returns the process exit code.
///
/// Output goes to `out` as pretty JSON. Errors, including a failure to
/// serialize or write the output, go to `err` and yield exit code 1.
pub fn report(
    outcome: Result<Value, BridgeError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    match outcome {
        Ok(output) => {
            let written = serde_json::to_string_pretty(&output)
                .map_err(io::Error::from)
                .and_then(|json| writeln!(out, "{json}"));
            match written {
                Ok(()) => 0,
                Err(e) => {
                    let _ = writeln!(err, "Error: {e}");
                    1
                }
            }
        }
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            if let Some(rescue) = e.suppressed() {
                let _ = writeln!(err, "Rescue attempt also failed: {rescue}");
            }
            1
        }
    }
}
