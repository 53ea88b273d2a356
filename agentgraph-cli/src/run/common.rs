//! Shared run logic: build the reference graph and invoke it.
//!
//! Used by [`run_with_config`](super::run_with_config) and by tests that inject
//! their own decider or checkpointer.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use agentgraph::{
    reference_state_graph, AgentState, Checkpointer, CompiledStateGraph, Decider, InvokeOptions,
    RunOutcome,
};

use crate::config::RunConfig;
use crate::middleware::WithNodeLogging;

use super::Error;

/// Runs the reference supervisor graph from `state`.
///
/// When `checkpointer` is set and the config carries a thread id, the final
/// state is saved under it.
pub(crate) async fn run_reference_graph(
    config: &RunConfig,
    decider: Arc<dyn Decider>,
    state: AgentState,
    budget: Option<std::time::Duration>,
    cancel: CancellationToken,
    checkpointer: Option<Arc<dyn Checkpointer<AgentState>>>,
) -> Result<RunOutcome<AgentState>, Error> {
    let graph = reference_state_graph(decider, &config.graph_config()).with_node_logging();
    let compiled: CompiledStateGraph<AgentState> = match checkpointer {
        Some(cp) => graph.compile_with_checkpointer(cp)?,
        None => graph.compile()?,
    };

    let mut options = InvokeOptions::new().with_cancel(cancel);
    if let Some(budget) = budget {
        options = options.with_timeout(budget);
    }
    if let Some(thread_id) = &config.thread_id {
        options = options.with_thread_id(thread_id.clone());
    }

    Ok(compiled.invoke_with(state, options).await)
}
