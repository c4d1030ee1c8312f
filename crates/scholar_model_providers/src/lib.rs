//! Provider backends for the Scholar AI request bridge.
//!
//! # Supported Backends
//!
//! | Backend | Feature Flag | Description |
//! |---------|--------------|-------------|
//! | OpenAI-compatible direct client | always | Chat-completions against any registry entry |
//! | Structured gateway | `gateway` (default) | Google endpoint with JSON schema output |
//!
//! # Usage
//!
//! The direct client needs an endpoint registry and a secret source. Keys are
//! looked up under `<PROVIDER>_API_KEY`:
//!
//! ```no_run
//! use scholar_model_providers::openai_compat::OpenAiCompatProvider;
//! use scholar_models::{ProviderEndpointRegistry, StaticSecrets};
//! use std::sync::Arc;
//!
//! let secrets = StaticSecrets::new().with("GROQ_API_KEY", "gsk-...");
//! let provider = OpenAiCompatProvider::new(
//!     Arc::new(ProviderEndpointRegistry::with_defaults()),
//!     Arc::new(secrets),
//! )
//! .expect("HTTP client should build");
//! ```
//!
//! The gateway reads `GOOGLE_API_KEY`:
//!
//! ```no_run
//! # #[cfg(feature = "gateway")]
//! # {
//! use scholar_model_providers::gateway::StructuredGateway;
//! use scholar_models::EnvSecrets;
//! use scholar_models::llm::GatewaySettings;
//!
//! let gateway = StructuredGateway::new(GatewaySettings::default(), &EnvSecrets)
//!     .expect("GOOGLE_API_KEY should be set");
//! # }
//! ```

#[cfg(feature = "gateway")]
mod schema;

pub mod openai_compat;

#[cfg(feature = "gateway")]
pub mod gateway;

pub use openai_compat::OpenAiCompatProvider;

#[cfg(feature = "gateway")]
pub use gateway::StructuredGateway;
