//! In-memory checkpointer for dev and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Checkpoint, CheckpointError, CheckpointListItem, Checkpointer};

/// In-memory checkpointer. Checkpoints live as long as the saver.
pub struct MemorySaver<S> {
    threads: RwLock<HashMap<String, Vec<Checkpoint<S>>>>,
}

impl<S> MemorySaver<S> {
    pub fn new() -> Self {
        Self {
            threads: RwLock::new(HashMap::new()),
        }
    }
}

impl<S> Default for MemorySaver<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<S> Checkpointer<S> for MemorySaver<S>
where
    S: Clone + Send + Sync + 'static,
{
    async fn put(&self, thread_id: &str, checkpoint: &Checkpoint<S>) -> Result<String, CheckpointError> {
        if thread_id.is_empty() {
            return Err(CheckpointError::ThreadIdRequired);
        }
        let mut threads = self.threads.write().await;
        threads
            .entry(thread_id.to_string())
            .or_default()
            .push(checkpoint.clone());
        Ok(checkpoint.id.clone())
    }

    async fn get_latest(&self, thread_id: &str) -> Result<Option<Checkpoint<S>>, CheckpointError> {
        if thread_id.is_empty() {
            return Err(CheckpointError::ThreadIdRequired);
        }
        let threads = self.threads.read().await;
        Ok(threads.get(thread_id).and_then(|v| v.last().cloned()))
    }

    async fn list(&self, thread_id: &str) -> Result<Vec<CheckpointListItem>, CheckpointError> {
        if thread_id.is_empty() {
            return Err(CheckpointError::ThreadIdRequired);
        }
        let threads = self.threads.read().await;
        Ok(threads
            .get(thread_id)
            .map(|v| {
                v.iter()
                    .map(|c| CheckpointListItem {
                        checkpoint_id: c.id.clone(),
                        metadata: c.metadata.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}
