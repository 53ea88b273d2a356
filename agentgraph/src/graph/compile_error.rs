//! Graph compilation error.
//!
//! Returned by `StateGraph::compile` when the node set, edges, or limits are
//! invalid. Compilation fails closed: no partially built graph escapes.

use thiserror::Error;

/// Error when compiling a state graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilationError {
    /// The same node id was registered more than once.
    #[error("duplicate node: {0}")]
    DuplicateNode(String),

    /// A node has neither a router nor a direct successor.
    #[error("node has no outgoing edge: {0}")]
    DanglingNode(String),

    /// An edge or the entry point references an id that was never registered.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// No entry point was set (neither `add_edge(START, ..)` nor `set_entry_point`).
    #[error("graph has no entry point")]
    MissingEntryPoint,

    /// A node was given more than one outgoing binding, or two entry points.
    #[error("conflicting edges from: {0}")]
    ConflictingEdges(String),

    /// The step cap must allow at least one step.
    #[error("max_steps must be at least 1")]
    InvalidMaxSteps,
}
