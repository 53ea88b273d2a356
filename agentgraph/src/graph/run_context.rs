//! Run context for streaming-aware execution.
//!
//! Holds the stream sender plus the selected stream modes for one run.

use std::collections::HashSet;

use tokio::sync::mpsc;

use crate::state::GraphState;
use crate::stream::{StreamEvent, StreamMode};

#[derive(Clone)]
pub(crate) struct RunContext<S>
where
    S: GraphState,
{
    /// Sender for streaming events.
    pub stream_tx: mpsc::Sender<StreamEvent<S>>,
    /// Enabled stream modes (Values, Updates).
    pub stream_mode: HashSet<StreamMode>,
}

impl<S: GraphState> RunContext<S> {
    /// Emits the per-step events enabled by `stream_mode`. Send errors (consumer
    /// dropped) are ignored; the run continues.
    pub async fn emit_step(&self, node_id: &str, update: &S::Update, state: &S) {
        if self.stream_mode.contains(&StreamMode::Values) {
            let _ = self.stream_tx.send(StreamEvent::Values(state.clone())).await;
        }
        if self.stream_mode.contains(&StreamMode::Updates) {
            let _ = self
                .stream_tx
                .send(StreamEvent::Updates {
                    node_id: node_id.to_string(),
                    update: update.clone(),
                })
                .await;
        }
    }
}
