//! Sparse update returned by agent nodes.
//!
//! Well-behaved nodes build updates with the typed `with_*` methods. Updates
//! decoded from JSON (e.g. a decision service's output) keep any key outside the
//! schema in `undeclared`, and the merge rejects them instead of dropping them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::message::Message;

use super::Field;

/// Sparse update: only the fields a node changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialState {
    /// Messages to append to the transcript.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    /// Next node to run, or the graph's terminal marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration: Option<u32>,
    /// Keys outside the schema. Any entry here makes the merge fail.
    #[serde(flatten)]
    pub undeclared: BTreeMap<String, serde_json::Value>,
}

impl PartialState {
    /// Creates an empty update (merging it leaves the state unchanged).
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an update from a JSON object. Unknown keys land in `undeclared`.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Appends one message to the messages this update carries.
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.get_or_insert_with(Vec::new).push(message);
        self
    }

    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages.get_or_insert_with(Vec::new).extend(messages);
        self
    }

    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    pub fn with_next_agent(mut self, next_agent: impl Into<String>) -> Self {
        self.next_agent = Some(next_agent.into());
        self
    }

    pub fn with_iteration(mut self, iteration: u32) -> Self {
        self.iteration = Some(iteration);
        self
    }

    /// Declared fields this update sets, in schema order.
    pub fn fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| match f {
                Field::Messages => self.messages.is_some(),
                Field::TaskId => self.task_id.is_some(),
                Field::NextAgent => self.next_agent.is_some(),
                Field::Iteration => self.iteration.is_some(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty() && self.undeclared.is_empty()
    }
}
