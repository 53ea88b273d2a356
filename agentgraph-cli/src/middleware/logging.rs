//! Logging middleware that records node enter/exit around each node.run call.

use std::time::Instant;

use async_trait::async_trait;

use agentgraph::graph::NodeCall;
use agentgraph::{AgentError, AgentState, NodeMiddleware, PartialState};

/// Middleware that logs node enter/exit around each node.run call.
///
/// Events go through `tracing`, so the subscriber decides whether they reach stderr.
pub struct LoggingMiddleware;

#[async_trait]
impl NodeMiddleware<AgentState> for LoggingMiddleware {
    async fn around_run(
        &self,
        node_id: &str,
        state: AgentState,
        inner: NodeCall<AgentState, PartialState>,
    ) -> Result<PartialState, AgentError> {
        tracing::debug!(node_id, iteration = state.iteration, "enter node");
        let started = Instant::now();
        let result = inner(state).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(update) => tracing::debug!(
                node_id,
                elapsed_ms,
                next = update.next_agent.as_deref().unwrap_or("-"),
                "exit node"
            ),
            Err(error) => tracing::warn!(node_id, elapsed_ms, %error, "node failed"),
        }
        result
    }
}
