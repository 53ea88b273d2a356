//! Run state: the accumulating value routed through the graph, and its merge rules.
//!
//! A graph is generic over a [`GraphState`]: a state type plus the sparse update
//! type its nodes return. [`AgentState`] is the schema used by the supervisor
//! graph; its update type is [`PartialState`].

mod agent_state;
mod partial;
mod schema;

use std::fmt::Debug;

use thiserror::Error;

pub use agent_state::AgentState;
pub use partial::PartialState;
pub use schema::{Field, MergeStrategy};

/// A state type the executor can drive.
///
/// `merge` must be pure: it never mutates `self` and returns a fresh value, so
/// concurrent runs sharing a graph never share mutable state.
pub trait GraphState: Clone + Send + Sync + Debug + 'static {
    /// Sparse update returned by nodes (only the fields a node changes).
    type Update: Clone + Send + Sync + Debug + 'static;

    /// Combines this state with an update using the per-field merge strategies.
    fn merge(&self, update: Self::Update) -> Result<Self, SchemaError>;

    /// Node nominated by the last update, read by the default next-agent router.
    fn next_agent(&self) -> Option<&str>;

    /// Checks required fields before a run starts.
    fn validate(&self) -> Result<(), SchemaError> {
        Ok(())
    }
}

/// A partial update (or initial state) does not fit the declared schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The update names a field the schema does not declare.
    #[error("undeclared state field: {0}")]
    UndeclaredField(String),

    /// A required field is absent or empty.
    #[error("required state field missing: {0}")]
    MissingField(&'static str),

    /// A write-once field was given a different value.
    #[error("state field {field} is immutable once set ({current:?} -> {attempted:?})")]
    ImmutableField {
        field: &'static str,
        current: String,
        attempted: String,
    },

    /// A monotonic field was given a smaller value.
    #[error("state field {field} may not decrease ({from} -> {to})")]
    Regressed {
        field: &'static str,
        from: u64,
        to: u64,
    },
}
