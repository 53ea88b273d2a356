//! Per-run options: wall-clock budget, cancellation, checkpoint thread.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Options for a single invoke. All fields are optional; the default runs with
/// no budget, no cancellation and no checkpointing.
#[derive(Debug, Clone, Default)]
pub struct InvokeOptions {
    /// Wall-clock budget for the whole run. On expiry the run stops as `Timeout`.
    pub timeout: Option<Duration>,
    /// Checked between steps; an in-flight handler call always completes first.
    pub cancel: Option<CancellationToken>,
    /// Thread id under which the final state is checkpointed (when the graph has a checkpointer).
    pub thread_id: Option<String>,
}

impl InvokeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn with_thread_id(mut self, thread_id: impl Into<String>) -> Self {
        self.thread_id = Some(thread_id.into());
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
    }
}
