//! LLM client abstraction for model-backed routing decisions.
//!
//! The engine treats a model call as an opaque decision function: given the
//! transcript, return text. [`LlmDecider`](crate::agents::LlmDecider) turns
//! that text into a next-agent choice.

mod mock;

pub use mock::MockLlm;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;

/// Response from an LLM completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmResponse {
    /// Assistant message content (plain text).
    pub content: String,
}

/// LLM client: given messages, returns assistant text.
///
/// **Interaction**: Used by `LlmDecider`; implementations wrap a real model API
/// or, in tests, `MockLlm`.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one turn: read messages, return assistant content.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError>;
}
