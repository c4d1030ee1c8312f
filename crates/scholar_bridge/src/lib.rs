//! Fallback orchestration between the managed gateway and direct providers.
//!
//! Capabilities describe a typed input and output ([`Capability`]). The
//! [`Orchestrator`] decides who answers:
//!
//! - the managed gateway, whose structured output is returned as-is;
//! - a direct OpenAI-compatible provider when the request names one, with its
//!   text reply normalized into the output type;
//! - the rescue provider, once, when the gateway is rate limited.
//!
//! # Example
//!
//! ```no_run
//! use scholar_bridge::capabilities::{Summarize, SummarizeInput, SummaryLength};
//! use scholar_bridge::BridgeConfig;
//! use scholar_models::EnvSecrets;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), scholar_models::BridgeError> {
//! let config = BridgeConfig::from_env()?;
//! let orchestrator = config.build_orchestrator(Arc::new(EnvSecrets))?;
//!
//! let input = SummarizeInput {
//!     text: "Photosynthesis turns light into chemical energy.".to_string(),
//!     length: SummaryLength::Short,
//! };
//! let summary = orchestrator
//!     .run(&Summarize, input, |_input, _options| async { Ok(None) })
//!     .await?;
//! # let _ = summary;
//! # Ok(())
//! # }
//! ```

pub mod capabilities;
pub mod capability;
pub mod config;
pub mod normalizer;
pub mod orchestrator;
pub mod rescue;

pub use capability::{Capability, CapabilityRegistry};
pub use config::BridgeConfig;
pub use normalizer::NormalizationTier;
pub use orchestrator::Orchestrator;
pub use rescue::RescuePolicy;
