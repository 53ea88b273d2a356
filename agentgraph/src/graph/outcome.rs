//! Result of one run: final state plus why it stopped.
//!
//! Run-time failures are reported here instead of being returned as `Err`, so
//! callers can inspect partial progress (e.g. messages accumulated so far).

use std::time::Duration;

use thiserror::Error;

use crate::error::AgentError;
use crate::state::SchemaError;

/// Run-fatal error. Stops the run as [`StopReason::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// The caller-supplied initial state is missing required fields.
    #[error("invalid initial state: {0}")]
    InvalidInitialState(#[source] SchemaError),

    /// A node's update did not fit the state schema.
    #[error("node {node} produced an invalid update: {source}")]
    Schema {
        node: String,
        #[source]
        source: SchemaError,
    },

    /// A routing target is not registered in the graph.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// A node handler failed.
    #[error("node {node} failed: {source}")]
    NodeExecution {
        node: String,
        #[source]
        source: AgentError,
    },
}

/// Why a run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// Routing reached the terminal marker.
    Terminated,
    /// The step cap was hit before reaching the terminal marker. Not an error.
    IterationLimitReached { max_steps: usize },
    /// A run-fatal error occurred; the state is the last successfully merged one.
    Failed(RunError),
    /// The wall-clock budget expired.
    Timeout { budget: Duration },
    /// External cancellation took effect at a step boundary.
    Cancelled,
}

impl StopReason {
    /// Short label used in logs and checkpoint metadata.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Terminated => "terminated",
            Self::IterationLimitReached { .. } => "iteration_limit_reached",
            Self::Failed(_) => "failed",
            Self::Timeout { .. } => "timeout",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Terminated => f.write_str("reached terminal"),
            Self::IterationLimitReached { max_steps } => {
                write!(f, "iteration limit reached ({} steps)", max_steps)
            }
            Self::Failed(e) => write!(f, "failed: {}", e),
            Self::Timeout { budget } => write!(f, "timed out after {:?}", budget),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// Final state of a run and the reason it stopped.
#[derive(Debug, Clone)]
pub struct RunOutcome<S> {
    /// Last successfully merged state.
    pub state: S,
    pub reason: StopReason,
    /// Completed steps (handler calls whose update was merged).
    pub steps: usize,
    /// Node that ran the last completed step; `None` if no step completed.
    pub last_node: Option<String>,
}

impl<S> RunOutcome<S> {
    pub fn is_terminated(&self) -> bool {
        matches!(self.reason, StopReason::Terminated)
    }

    /// The run-fatal error, if the run failed.
    pub fn error(&self) -> Option<&RunError> {
        match &self.reason {
            StopReason::Failed(e) => Some(e),
            _ => None,
        }
    }
}
