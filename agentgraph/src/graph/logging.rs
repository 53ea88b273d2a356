//! Logging utilities for graph execution.
//!
//! Structured `tracing` events for run start/stop, node execution and state
//! updates. Hosts decide where they go by installing a subscriber.

use crate::graph::{NodeRef, RunError, StopReason};

/// Log node execution start.
pub fn log_node_start(node_id: &str, step: usize) {
    tracing::debug!(node_id = node_id, step, "Starting node execution");
}

/// Log node execution completion and the resolved route.
pub fn log_node_complete(node_id: &str, next: &NodeRef) {
    tracing::debug!(node_id = node_id, next = %next, "Node execution complete");
}

/// Log state update after a successful merge.
pub fn log_state_update(node_id: &str, steps: usize) {
    tracing::debug!(node_id = node_id, steps, "State updated");
}

/// Log graph execution start.
pub fn log_graph_start(entry: &str, max_steps: usize) {
    tracing::info!(entry = entry, max_steps, "Starting graph execution");
}

/// Log graph execution stop (any reason other than failure).
pub fn log_graph_complete(reason: &StopReason, steps: usize) {
    tracing::info!(reason = reason.label(), steps, "Graph execution complete");
}

/// Log graph execution error.
pub fn log_graph_error(error: &RunError, steps: usize) {
    tracing::error!(%error, steps, "Graph execution error");
}
