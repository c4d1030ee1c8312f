//! Provider interface and endpoint registry for Scholar.
//!
//! Defines the vocabulary shared by every part of the AI request bridge,
//! decoupling capability call sites from concrete provider backends.
//!
//! # Overview
//!
//! - Provider-agnostic: Capabilities and the orchestrator depend only on this crate,
//!   never on a specific HTTP backend.
//!
//! - Injected configuration: The [`ProviderEndpointRegistry`] and the
//!   [`SecretSource`] are built once at startup and handed to the backends that
//!   need them, so tests can swap in fake registries and in-memory secrets.
//!
//! - One error taxonomy: Every failure the bridge can surface is a
//!   [`BridgeError`], with messages written to be shown to users verbatim.
//!
//! # Example
//!
//! ```
//! use scholar_models::{ProviderEndpointRegistry, api_key_var};
//!
//! let registry = ProviderEndpointRegistry::with_defaults();
//! assert!(registry.contains("groq"));
//! assert_eq!(api_key_var("groq"), "GROQ_API_KEY");
//! ```

pub mod error;
pub mod llm;
mod registry;
mod secrets;

pub use error::BridgeError;
pub use registry::ProviderEndpointRegistry;
pub use secrets::{EnvSecrets, SecretSource, StaticSecrets, api_key_var};
