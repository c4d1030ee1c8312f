//! # Scholar Internal Library
//!
//! Re-exports the core Scholar crates for convenience.

/// Provider vocabulary: errors, endpoint registry, secrets.
pub use scholar_models;

/// HTTP backends: OpenAI-compatible direct client and managed gateway.
pub use scholar_model_providers;

/// Orchestration, normalization and capabilities.
pub use scholar_bridge;

/// Ambient infrastructure.
pub use scholar_core;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use scholar_bridge::capabilities::*;
    pub use scholar_bridge::{
        BridgeConfig, Capability, CapabilityRegistry, NormalizationTier, Orchestrator,
        RescuePolicy,
    };
    pub use scholar_core::{TracingFormat, TracingSetup};
    #[cfg(feature = "gateway")]
    pub use scholar_model_providers::StructuredGateway;
    pub use scholar_model_providers::OpenAiCompatProvider;
    pub use scholar_models::llm::{
        DirectProvider, GatewayError, GatewayOptions, GatewaySettings, ProviderRequest, Route,
    };
    pub use scholar_models::{
        BridgeError, EnvSecrets, ProviderEndpointRegistry, SecretSource, StaticSecrets,
    };
}
