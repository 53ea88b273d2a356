//! Streaming types for graph runs.
//!
//! Defines stream modes and events for value and update streaming. Used by
//! `CompiledStateGraph::stream`.

use crate::graph::StopReason;
use crate::state::GraphState;

/// Stream mode selector: which per-step events to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamMode {
    /// Emit full merged state after each step.
    Values,
    /// Emit the node id and the partial update it returned.
    Updates,
}

/// Event emitted while running a graph.
#[derive(Clone, Debug)]
pub enum StreamEvent<S>
where
    S: GraphState,
{
    /// Full state snapshot after a step's update was merged.
    Values(S),
    /// The sparse update a node returned.
    Updates { node_id: String, update: S::Update },
    /// Always the last event of a stream.
    Finished { reason: StopReason, steps: usize },
}
