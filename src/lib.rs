//! An AI request bridge for study tools.
//!
//! Capability call sites hand a typed request to the [`Orchestrator`](prelude::Orchestrator),
//! which tries the managed gateway first, routes to direct OpenAI-compatible
//! providers when asked, and falls back once to a rescue provider when the
//! gateway is rate limited.
//!

pub use scholar_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use scholar_internal::prelude::*;
}
