//! Node execution error types.
//!
//! Returned by `Node::run` when a handler hits an unrecoverable condition. The
//! executor wraps it with the node name as [`RunError::NodeExecution`](crate::graph::RunError).

use thiserror::Error;

/// Error raised by a node handler or by a collaborator it calls (decision service, LLM).
///
/// Handlers never use this for control flow; routing is expressed through the
/// returned update. Any `AgentError` stops the run as `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. decision service unreachable).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}
