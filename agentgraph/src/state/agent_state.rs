//! Agent state: transcript, task id, next-agent nomination and iteration counter.

use serde::{Deserialize, Serialize};

use crate::message::Message;

use super::{Field, GraphState, PartialState, SchemaError};

/// State shared by the supervisor graph's nodes.
///
/// - `messages` only grows (append merge, chronological).
/// - `task_id` is set at seed time and never changes.
/// - `next_agent` is replaced by every update that sets it.
/// - `iteration` is replaced, never summed, and never decreases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentState {
    #[serde(default)]
    pub messages: Vec<Message>,
    pub task_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_agent: Option<String>,
    #[serde(default)]
    pub iteration: u32,
}

impl AgentState {
    /// Seeds a state for `task_id` with an empty transcript and iteration 0.
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            ..Self::default()
        }
    }

    pub fn with_iteration(mut self, iteration: u32) -> Self {
        self.iteration = iteration;
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

impl GraphState for AgentState {
    type Update = PartialState;

    fn merge(&self, update: PartialState) -> Result<Self, SchemaError> {
        if let Some(name) = update.undeclared.keys().next() {
            return Err(SchemaError::UndeclaredField(name.clone()));
        }

        let task_id = match update.task_id {
            Some(t) if !self.task_id.is_empty() && t != self.task_id => {
                return Err(SchemaError::ImmutableField {
                    field: Field::TaskId.name(),
                    current: self.task_id.clone(),
                    attempted: t,
                });
            }
            Some(t) => t,
            None => self.task_id.clone(),
        };

        let iteration = match update.iteration {
            Some(i) if i < self.iteration => {
                return Err(SchemaError::Regressed {
                    field: Field::Iteration.name(),
                    from: u64::from(self.iteration),
                    to: u64::from(i),
                });
            }
            Some(i) => i,
            None => self.iteration,
        };

        Ok(Self {
            messages: Field::Messages
                .strategy()
                .apply(&self.messages, update.messages),
            task_id,
            next_agent: update.next_agent.or_else(|| self.next_agent.clone()),
            iteration,
        })
    }

    fn next_agent(&self) -> Option<&str> {
        self.next_agent.as_deref()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        if self.task_id.is_empty() {
            return Err(SchemaError::MissingField(Field::TaskId.name()));
        }
        Ok(())
    }
}
