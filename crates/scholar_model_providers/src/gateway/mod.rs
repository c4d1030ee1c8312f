//! Managed gateway backend.
//!
//! Talks to Google's OpenAI-compatible endpoint with JSON schema structured
//! output, so capabilities receive typed values without normalization.

mod provider;

pub use provider::{GOOGLE_GATEWAY_URL, StructuredGateway};
