//! Declared fields of [`AgentState`](super::AgentState) and how each one merges.

use std::fmt;

/// How an update value combines with the current value of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Current sequence followed by the update's sequence, order preserved.
    Append,
    /// Update's value wins when present; otherwise the current value is kept.
    Replace,
}

impl MergeStrategy {
    /// Combines a sequence field's current value with an update's value.
    ///
    /// An absent update keeps `current` under either strategy.
    pub fn apply<T: Clone>(self, current: &[T], update: Option<Vec<T>>) -> Vec<T> {
        match (self, update) {
            (_, None) => current.to_vec(),
            (MergeStrategy::Append, Some(appended)) => {
                let mut merged = Vec::with_capacity(current.len() + appended.len());
                merged.extend_from_slice(current);
                merged.extend(appended);
                merged
            }
            (MergeStrategy::Replace, Some(replacement)) => replacement,
        }
    }
}

/// A field declared by the agent state schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Messages,
    TaskId,
    NextAgent,
    Iteration,
}

impl Field {
    /// Every declared field, in schema order.
    pub const ALL: [Field; 4] = [
        Field::Messages,
        Field::TaskId,
        Field::NextAgent,
        Field::Iteration,
    ];

    /// Field name as it appears in state and update records.
    pub fn name(self) -> &'static str {
        match self {
            Field::Messages => "messages",
            Field::TaskId => "task_id",
            Field::NextAgent => "next_agent",
            Field::Iteration => "iteration",
        }
    }

    pub fn strategy(self) -> MergeStrategy {
        match self {
            Field::Messages => MergeStrategy::Append,
            Field::TaskId | Field::NextAgent | Field::Iteration => MergeStrategy::Replace,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
