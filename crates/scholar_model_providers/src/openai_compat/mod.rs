//! OpenAI-compatible direct provider backend.
//!
//! Uses the chat-completions API shared by `OpenAI`, Groq, `OpenRouter`,
//! `DeepSeek` and most hosted inference services.
//!
//! ```no_run
//! # use scholar_model_providers::openai_compat::OpenAiCompatProvider;
//! # use scholar_models::ProviderEndpointRegistry;
//! # use std::sync::Arc;
//! let provider = OpenAiCompatProvider::from_env(Arc::new(ProviderEndpointRegistry::with_defaults()))
//!     .expect("HTTP client should build");
//! ```

mod client;
mod provider;
pub mod types;

pub use client::{ChatCompletionsClient, DEFAULT_REQUEST_TIMEOUT};
pub use provider::{DEFAULT_TEMPERATURE, OpenAiCompatProvider};
