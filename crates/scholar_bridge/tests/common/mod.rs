//! Shared fakes for orchestrator tests.

#![allow(dead_code, reason = "helpers are shared between test binaries")]

use async_trait::async_trait;
use scholar_bridge::Orchestrator;
use scholar_models::BridgeError;
use scholar_models::llm::DirectProvider;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// One recorded `call_direct` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectCall {
    pub provider: String,
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
}

/// A direct provider answering with a canned reply and recording its calls.
pub struct FakeDirect {
    reply: Box<dyn Fn() -> Result<String, BridgeError> + Send + Sync>,
    calls: AtomicUsize,
    recorded: Mutex<Vec<DirectCall>>,
}

impl FakeDirect {
    pub fn replying(text: &str) -> Arc<Self> {
        let text = text.to_string();
        Self::with(move || Ok(text.clone()))
    }

    pub fn failing(make_error: impl Fn() -> BridgeError + Send + Sync + 'static) -> Arc<Self> {
        Self::with(move || Err(make_error()))
    }

    fn with(reply: impl Fn() -> Result<String, BridgeError> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            reply: Box::new(reply),
            calls: AtomicUsize::new(0),
            recorded: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<DirectCall> {
        self.recorded.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectProvider for FakeDirect {
    async fn call_direct(
        &self,
        provider: &str,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, BridgeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.recorded.lock().unwrap().push(DirectCall {
            provider: provider.to_string(),
            model: model.to_string(),
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
        });
        (self.reply)()
    }
}

/// An orchestrator with default settings over `direct`.
pub fn orchestrator(direct: &Arc<FakeDirect>) -> Orchestrator {
    Orchestrator::new(direct.clone())
}
