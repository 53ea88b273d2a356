//! Routing target: a concrete node id or the terminal marker.
//!
//! Produced by a [`Router`](super::Router) or a direct edge after each step;
//! consumed by `CompiledStateGraph` to pick the next node or stop.

use std::fmt;

/// Where the run goes after a node.
///
/// - **Node(id)**: run the node with that id next (existence is checked by the executor).
/// - **End**: the terminal marker; stop with `Terminated`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum NodeRef {
    /// Run the node with the given id next.
    Node(String),
    /// Stop and return the current state.
    End,
}

impl NodeRef {
    pub fn node(id: impl Into<String>) -> Self {
        Self::Node(id.into())
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(id) => f.write_str(id),
            Self::End => f.write_str("<end>"),
        }
    }
}
