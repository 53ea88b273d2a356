//! Checkpoint and metadata types.

use std::time::SystemTime;

use crate::graph::RunOutcome;

/// Metadata for a single checkpoint: how the run ended and when it was saved.
#[derive(Debug, Clone)]
pub struct CheckpointMetadata {
    /// Stop reason label (`terminated`, `failed`, ...).
    pub reason: &'static str,
    pub steps: usize,
    pub created_at: SystemTime,
}

/// One checkpoint: final state snapshot + id/ts.
///
/// **Interaction**: Produced by the executor after a run; consumed by
/// `Checkpointer::put`, returned by `get_latest`.
#[derive(Debug, Clone)]
pub struct Checkpoint<S> {
    pub id: String,
    pub ts: String,
    pub state: S,
    pub metadata: CheckpointMetadata,
}

/// Item returned by `Checkpointer::list` for history.
#[derive(Debug, Clone)]
pub struct CheckpointListItem {
    pub checkpoint_id: String,
    pub metadata: CheckpointMetadata,
}

impl<S: Clone> Checkpoint<S> {
    /// Creates a checkpoint from a run outcome. Uses current time for id/ts.
    pub fn from_outcome(outcome: &RunOutcome<S>) -> Self {
        let now = SystemTime::now();
        let ts = format!(
            "{}",
            now.duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0)
        );
        let id = format!("{}-{}", ts, outcome.steps);
        Self {
            id,
            ts,
            state: outcome.state.clone(),
            metadata: CheckpointMetadata {
                reason: outcome.reason.label(),
                steps: outcome.steps,
                created_at: now,
            },
        }
    }
}
