//! LLM call contracts.
//!
//! This module provides the traits and types both request paths share:
//!
//! - Managed gateway identity, model namespacing and [`GatewayError`]
//! - The [`DirectProvider`] trait for OpenAI-compatible backends
//! - [`ProviderRequest`] and chat message types

mod error;
mod model;
mod provider;
mod types;

pub use error::{GatewayError, RATE_LIMIT_MARKERS};
pub use model::{DEFAULT_MODEL, GATEWAY_NAMESPACE, GATEWAY_PROVIDER, GatewaySettings};
pub use provider::DirectProvider;
pub use types::{ChatMessage, GatewayOptions, ProviderRequest, Role, Route};
