//! Mock LLM for tests and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;

use super::{LlmClient, LlmResponse};

/// Mock LLM: returns a fixed reply (or a fixed error) and counts calls.
pub struct MockLlm {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl MockLlm {
    /// Always replies with `content`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            reply: Ok(content.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails with `AgentError::ExecutionFailed(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, _messages: &[Message]) -> Result<LlmResponse, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(content) => Ok(LlmResponse {
                content: content.clone(),
            }),
            Err(message) => Err(AgentError::ExecutionFailed(message.clone())),
        }
    }
}
