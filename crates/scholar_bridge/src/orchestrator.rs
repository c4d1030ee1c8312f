//! The fallback orchestrator.
//!
//! One [`Orchestrator::execute`] call walks, at most, two paths:
//!
//! 1. The managed gateway (structured output), or a direct provider when the
//!    request names one.
//! 2. A single rescue call to the [`RescuePolicy`] provider when the gateway
//!    reports a rate-limit condition.
//!
//! Direct and rescue replies are free text and go through the
//! [`normalizer`](crate::normalizer) so the caller always receives its
//! capability's output type.

use crate::capability::Capability;
use crate::normalizer::{NormalizationTier, normalize_into};
use crate::rescue::{GatewayFailure, RescuePolicy};
use scholar_models::BridgeError;
use scholar_models::llm::{
    DirectProvider, GatewayError, GatewayOptions, GatewaySettings, ProviderRequest,
};
use std::sync::Arc;

#[cfg(feature = "gateway")]
use scholar_model_providers::StructuredGateway;

/// Routes capability requests between the managed gateway, direct providers
/// and the rescue provider.
///
/// The orchestrator holds only read-only configuration and is cheap to clone
/// and share across tasks.
#[derive(Clone)]
pub struct Orchestrator {
    direct: Arc<dyn DirectProvider>,
    gateway: GatewaySettings,
    rescue: RescuePolicy,
}

impl Orchestrator {
    /// Creates an orchestrator with default gateway settings and rescue policy.
    #[must_use]
    pub fn new(direct: Arc<dyn DirectProvider>) -> Self {
        Self {
            direct,
            gateway: GatewaySettings::default(),
            rescue: RescuePolicy::default(),
        }
    }

    /// Replaces the gateway settings.
    #[must_use]
    pub fn with_gateway_settings(mut self, gateway: GatewaySettings) -> Self {
        self.gateway = gateway;
        self
    }

    /// Replaces the rescue policy.
    #[must_use]
    pub fn with_rescue_policy(mut self, rescue: RescuePolicy) -> Self {
        self.rescue = rescue;
        self
    }

    /// Returns the gateway settings.
    #[must_use]
    pub fn gateway_settings(&self) -> &GatewaySettings {
        &self.gateway
    }

    /// Returns the rescue policy.
    #[must_use]
    pub fn rescue_policy(&self) -> &RescuePolicy {
        &self.rescue
    }

    /// Executes one capability request.
    ///
    /// `gateway_call` performs the managed gateway invocation. It receives the
    /// capability input and the namespaced model, and returns `Ok(None)` when
    /// the gateway produced no output. It is only invoked when the request
    /// targets the gateway.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::MissingPromptParameters`] if a direct provider is
    ///   requested without both prompts. No network call is made.
    /// - Any error from the direct provider on the direct path.
    /// - [`BridgeError::Gateway`] or [`BridgeError::EmptyProviderOutput`] for a
    ///   failed gateway call that was not rescued. If a rescue attempt was
    ///   made and failed, its error is available through
    ///   [`BridgeError::suppressed`].
    pub async fn execute<C, F, Fut>(
        &self,
        capability: &C,
        request: ProviderRequest<C::Input>,
        gateway_call: F,
    ) -> Result<C::Output, BridgeError>
    where
        C: Capability,
        F: FnOnce(C::Input, GatewayOptions) -> Fut,
        Fut: Future<Output = Result<Option<C::Output>, GatewayError>>,
    {
        let ProviderRequest {
            input,
            preferred_provider,
            preferred_model,
            system_prompt,
            user_prompt,
        } = request;
        let system_prompt = system_prompt.filter(|prompt| !prompt.is_empty());
        let user_prompt = user_prompt.filter(|prompt| !prompt.is_empty());

        let provider = preferred_provider.unwrap_or_else(|| self.gateway.provider.clone());

        if !self.gateway.is_gateway(&provider) {
            let model = preferred_model.unwrap_or_else(|| self.gateway.default_model.clone());
            let (Some(system), Some(user)) = (system_prompt, user_prompt) else {
                return Err(BridgeError::MissingPromptParameters { provider });
            };

            tracing::debug!(capability = C::ID, %provider, %model, "routing to direct provider");
            let text = self.direct.call_direct(&provider, &model, &system, &user).await?;
            return Ok(normalize_into(capability, &text, NormalizationTier::Full));
        }

        let options = GatewayOptions {
            model: self.gateway.resolve_model(preferred_model.as_deref()),
        };
        tracing::debug!(capability = C::ID, model = %options.model, "routing to managed gateway");

        let failure = match gateway_call(input, options).await {
            Ok(Some(output)) => return Ok(output),
            Ok(None) => GatewayFailure::Empty,
            Err(err) => GatewayFailure::Error(err),
        };

        if !self.rescue.should_rescue(&failure) {
            return Err(failure.into_error());
        }
        let original = failure.into_error();

        let (Some(system), Some(user)) = (system_prompt, user_prompt) else {
            tracing::debug!(
                capability = C::ID,
                error = %original,
                "gateway failure is rescue-eligible but prompts are missing"
            );
            return Err(original);
        };

        tracing::warn!(
            capability = C::ID,
            error = %original,
            rescue_provider = %self.rescue.provider,
            rescue_model = %self.rescue.model,
            "managed gateway unavailable, escalating to rescue provider"
        );

        match self
            .direct
            .call_direct(&self.rescue.provider, &self.rescue.model, &system, &user)
            .await
        {
            Ok(text) => Ok(normalize_into(capability, &text, NormalizationTier::Reduced)),
            Err(rescue_err) => {
                tracing::warn!(
                    capability = C::ID,
                    error = %rescue_err,
                    "rescue provider failed, returning the gateway error"
                );
                Err(original.with_suppressed(rescue_err))
            }
        }
    }

    /// Executes `capability` on its default route with its rendered prompts.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn run<C, F, Fut>(
        &self,
        capability: &C,
        input: C::Input,
        gateway_call: F,
    ) -> Result<C::Output, BridgeError>
    where
        C: Capability,
        F: FnOnce(C::Input, GatewayOptions) -> Fut,
        Fut: Future<Output = Result<Option<C::Output>, GatewayError>>,
    {
        let request = prepare_request(capability, input);
        self.execute(capability, request, gateway_call).await
    }

    /// Executes `capability` on its default route, using `gateway` for the
    /// managed gateway call.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    #[cfg(feature = "gateway")]
    pub async fn run_structured<C: Capability>(
        &self,
        capability: &C,
        input: C::Input,
        gateway: &StructuredGateway,
    ) -> Result<C::Output, BridgeError> {
        let request = prepare_request(capability, input);
        self.execute_structured(capability, request, gateway).await
    }

    /// Executes a prepared request, using `gateway` for the managed gateway call.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    #[cfg(feature = "gateway")]
    pub async fn execute_structured<C: Capability>(
        &self,
        capability: &C,
        request: ProviderRequest<C::Input>,
        gateway: &StructuredGateway,
    ) -> Result<C::Output, BridgeError> {
        let system = request.system_prompt.clone().filter(|p| !p.is_empty());
        let user = request.user_prompt.clone().filter(|p| !p.is_empty());

        // Prompts missing from the request are rendered from the input.
        self.execute(capability, request, |input, options| {
            let system = system.unwrap_or_else(|| capability.system_prompt(&input));
            let user = user.unwrap_or_else(|| capability.user_prompt(&input));
            async move {
                let system = Some(system.as_str()).filter(|p| !p.is_empty());
                gateway.generate::<C::Output>(&options, system, &user).await
            }
        })
        .await
    }
}

/// Builds a request on the capability's default route with rendered prompts.
pub fn prepare_request<C: Capability>(capability: &C, input: C::Input) -> ProviderRequest<C::Input> {
    let system = capability.system_prompt(&input);
    let user = capability.user_prompt(&input);
    ProviderRequest::new(input)
        .route(capability.default_route())
        .prompts(system, user)
}

impl core::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("gateway", &self.gateway)
            .field("rescue", &self.rescue)
            .finish_non_exhaustive()
    }
}
