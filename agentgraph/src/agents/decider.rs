//! Decision interface held by the supervisor.
//!
//! The supervisor owns a `Decider` by composition, so the routing policy can be
//! swapped (fixed stub, model call, rules) without touching the executor.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::message::Message;
use crate::state::AgentState;

use super::RESEARCHER;

/// Picks the next agent for the supervisor.
#[async_trait]
pub trait Decider: Send + Sync {
    /// Returns the id of the agent that should run next.
    async fn decide(&self, state: &AgentState) -> Result<String, AgentError>;
}

/// Always picks the same agent. The default routes every task to research first.
#[derive(Debug, Clone)]
pub struct FixedDecider {
    target: String,
}

impl FixedDecider {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl Default for FixedDecider {
    fn default() -> Self {
        Self::new(RESEARCHER)
    }
}

#[async_trait]
impl Decider for FixedDecider {
    async fn decide(&self, _state: &AgentState) -> Result<String, AgentError> {
        Ok(self.target.clone())
    }
}

/// System prompt for model-backed routing. `{candidates}` is replaced with the
/// comma-separated agent ids.
pub const ROUTER_SYSTEM_PROMPT: &str = "You are the supervisor of a team of agents. \
Read the transcript and reply with exactly one agent id from this list, nothing else: {candidates}.";

/// Asks an LLM which agent runs next and accepts only ids from `candidates`.
pub struct LlmDecider {
    llm: Box<dyn LlmClient>,
    candidates: Vec<String>,
}

impl LlmDecider {
    pub fn new(llm: Box<dyn LlmClient>, candidates: Vec<String>) -> Self {
        Self { llm, candidates }
    }

    /// Prompt sent to the model: routing instructions, task header, then the transcript.
    fn prompt(&self, state: &AgentState) -> Vec<Message> {
        let mut messages = Vec::with_capacity(state.messages.len() + 2);
        messages.push(Message::system(
            ROUTER_SYSTEM_PROMPT.replace("{candidates}", &self.candidates.join(", ")),
        ));
        messages.push(Message::user(format!(
            "task_id={} iteration={}",
            state.task_id, state.iteration
        )));
        messages.extend(state.messages.iter().cloned());
        messages
    }
}

#[async_trait]
impl Decider for LlmDecider {
    async fn decide(&self, state: &AgentState) -> Result<String, AgentError> {
        let response = self.llm.invoke(&self.prompt(state)).await?;
        let choice = response
            .content
            .trim()
            .trim_matches(|c: char| c == '"' || c == '\'' || c == '.' || c == '`');
        self.candidates
            .iter()
            .find(|c| c.eq_ignore_ascii_case(choice))
            .cloned()
            .ok_or_else(|| {
                AgentError::ExecutionFailed(format!(
                    "decision service chose unknown agent: {:?}",
                    response.content
                ))
            })
    }
}
