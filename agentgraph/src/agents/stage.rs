//! Pipeline stage node: appends one message and names a fixed successor.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::Node;
use crate::message::Message;
use crate::state::{AgentState, PartialState};

/// One deterministic pipeline step.
///
/// Each call appends exactly one message describing the completed action and
/// nominates `next` (another stage id or the terminal marker).
#[derive(Debug, Clone)]
pub struct StageNode {
    id: String,
    summary: String,
    next: String,
}

impl StageNode {
    pub fn new(id: impl Into<String>, summary: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            next: next.into(),
        }
    }
}

#[async_trait]
impl Node<AgentState> for StageNode {
    fn id(&self) -> &str {
        &self.id
    }

    async fn run(&self, _state: &AgentState) -> Result<PartialState, AgentError> {
        Ok(PartialState::new()
            .with_message(Message::assistant(self.summary.clone()))
            .with_next_agent(self.next.clone()))
    }
}
