//! Checkpointer trait and error.

use async_trait::async_trait;
use thiserror::Error;

use super::{Checkpoint, CheckpointListItem};

/// Error from a checkpointer operation.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// thread_id was empty.
    #[error("thread_id required")]
    ThreadIdRequired,
    /// Backend storage failure.
    #[error("storage: {0}")]
    Storage(String),
}

/// Saves and loads run checkpoints keyed by thread id.
///
/// **Interaction**: Held by `CompiledStateGraph` when compiled with
/// `compile_with_checkpointer`; `put` is called once per run that carries a thread id.
#[async_trait]
pub trait Checkpointer<S>: Send + Sync
where
    S: Clone + Send + Sync + 'static,
{
    /// Stores a checkpoint; returns its id.
    async fn put(&self, thread_id: &str, checkpoint: &Checkpoint<S>) -> Result<String, CheckpointError>;

    /// Most recent checkpoint for the thread, if any.
    async fn get_latest(&self, thread_id: &str) -> Result<Option<Checkpoint<S>>, CheckpointError>;

    /// All checkpoints for the thread, oldest first.
    async fn list(&self, thread_id: &str) -> Result<Vec<CheckpointListItem>, CheckpointError>;
}
