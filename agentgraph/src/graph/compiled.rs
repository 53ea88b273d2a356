//! Compiled state graph: immutable, drives runs.
//!
//! Built by `StateGraph::compile` (or a `compile_with_*` variant). Each run
//! owns its state; the graph itself is shared read-only, so one compiled graph
//! may serve many concurrent runs.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_stream::wrappers::ReceiverStream;

use crate::error::AgentError;
use crate::memory::{Checkpoint, Checkpointer};
use crate::state::GraphState;
use crate::stream::{StreamEvent, StreamMode};

use super::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_state_update,
};
use super::node_middleware::{NodeFuture, NodeMiddleware};
use super::run_context::RunContext;
use super::{InvokeOptions, Node, NodeRef, Router, RunError, RunOutcome, StopReason};

/// Resolved outgoing binding of a node.
pub(super) enum Edge<S> {
    Direct(NodeRef),
    Conditional(Arc<dyn Router<S>>),
}

impl<S> Clone for Edge<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Direct(to) => Self::Direct(to.clone()),
            Self::Conditional(router) => Self::Conditional(Arc::clone(router)),
        }
    }
}

impl<S> Edge<S> {
    fn resolve(&self, state: &S) -> NodeRef {
        match self {
            Self::Direct(to) => to.clone(),
            Self::Conditional(router) => router.route(state),
        }
    }
}

/// A registered node with its routing binding.
pub(super) struct NodeEntry<S>
where
    S: GraphState,
{
    pub(super) node: Arc<dyn Node<S>>,
    pub(super) edge: Edge<S>,
}

/// Compiled graph: immutable structure, supports invoke and stream.
///
/// Each step: run the current node, merge its update, resolve the next node
/// with the node's router, then stop on the terminal marker or the step cap.
pub struct CompiledStateGraph<S>
where
    S: GraphState,
{
    pub(super) nodes: Arc<HashMap<String, NodeEntry<S>>>,
    pub(super) entry: String,
    pub(super) max_steps: usize,
    pub(super) terminal_marker: String,
    pub(super) checkpointer: Option<Arc<dyn Checkpointer<S>>>,
    pub(super) middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> Clone for CompiledStateGraph<S>
where
    S: GraphState,
{
    fn clone(&self) -> Self {
        Self {
            nodes: Arc::clone(&self.nodes),
            entry: self.entry.clone(),
            max_steps: self.max_steps,
            terminal_marker: self.terminal_marker.clone(),
            checkpointer: self.checkpointer.clone(),
            middleware: self.middleware.clone(),
        }
    }
}

impl<S> CompiledStateGraph<S>
where
    S: GraphState,
{
    pub fn entry_point(&self) -> &str {
        &self.entry
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn terminal_marker(&self) -> &str {
        &self.terminal_marker
    }

    /// Registered node ids, sorted.
    pub fn node_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Resolves where the run would go after `node_id` given `state`, without running anything.
    ///
    /// Returns `None` if `node_id` is not registered.
    pub fn route_from(&self, node_id: &str, state: &S) -> Option<NodeRef> {
        self.nodes.get(node_id).map(|e| e.edge.resolve(state))
    }

    /// Runs the graph from the entry point with no budget, cancellation or checkpointing.
    pub async fn invoke(&self, state: S) -> RunOutcome<S> {
        self.invoke_with(state, InvokeOptions::default()).await
    }

    /// Runs the graph with per-run options.
    ///
    /// Never returns an error: failures, timeouts and cancellation are reported
    /// in [`RunOutcome::reason`] alongside the last merged state.
    pub async fn invoke_with(&self, state: S, options: InvokeOptions) -> RunOutcome<S> {
        let outcome = self.run_loop(state, &options, None).await;
        self.finish(&outcome, &options).await;
        outcome
    }

    /// Streams graph execution, emitting events via a channel-backed stream.
    ///
    /// Per step, emits `Values` and/or `Updates` as selected by `stream_mode`;
    /// the last event is always `Finished`.
    pub fn stream(
        &self,
        state: S,
        options: InvokeOptions,
        stream_mode: impl Into<HashSet<StreamMode>>,
    ) -> ReceiverStream<StreamEvent<S>> {
        let (tx, rx) = mpsc::channel(128);
        let graph = self.clone();
        let stream_mode: HashSet<StreamMode> = stream_mode.into();

        tokio::spawn(async move {
            let ctx = RunContext {
                stream_tx: tx.clone(),
                stream_mode,
            };
            let outcome = graph.run_loop(state, &options, Some(&ctx)).await;
            graph.finish(&outcome, &options).await;
            let _ = tx
                .send(StreamEvent::Finished {
                    reason: outcome.reason,
                    steps: outcome.steps,
                })
                .await;
        });

        ReceiverStream::new(rx)
    }

    /// Step loop shared by invoke and stream.
    async fn run_loop(
        &self,
        state: S,
        options: &InvokeOptions,
        run_ctx: Option<&RunContext<S>>,
    ) -> RunOutcome<S> {
        log_graph_start(&self.entry, self.max_steps);

        let mut state = state;
        let mut steps = 0usize;
        let mut last_node: Option<String> = None;
        let deadline = options.timeout.map(|budget| (Instant::now() + budget, budget));

        let reason = 'run: {
            if let Err(e) = state.validate() {
                break 'run StopReason::Failed(RunError::InvalidInitialState(e));
            }

            let mut current = self.entry.clone();
            loop {
                if options.is_cancelled() {
                    break 'run StopReason::Cancelled;
                }
                if let Some((at, budget)) = deadline {
                    if Instant::now() >= at {
                        break 'run StopReason::Timeout { budget };
                    }
                }

                let Some(entry) = self.nodes.get(&current) else {
                    break 'run StopReason::Failed(RunError::UnknownNode(current));
                };

                log_node_start(&current, steps);
                let call = self.call_node(&current, &entry.node, &state);
                let result = match deadline {
                    // Dropping the in-flight call discards its update; state stays at the last merge.
                    Some((at, budget)) => match tokio::time::timeout_at(at, call).await {
                        Ok(r) => r,
                        Err(_) => break 'run StopReason::Timeout { budget },
                    },
                    None => call.await,
                };

                let update = match result {
                    Ok(u) => u,
                    Err(source) => {
                        break 'run StopReason::Failed(RunError::NodeExecution {
                            node: current,
                            source,
                        });
                    }
                };
                let streamed = run_ctx.map(|_| update.clone());
                state = match state.merge(update) {
                    Ok(s) => s,
                    Err(source) => {
                        break 'run StopReason::Failed(RunError::Schema {
                            node: current,
                            source,
                        });
                    }
                };
                steps += 1;
                log_state_update(&current, steps);
                if let (Some(ctx), Some(update)) = (run_ctx, streamed.as_ref()) {
                    ctx.emit_step(&current, update, &state).await;
                }

                let next = entry.edge.resolve(&state);
                log_node_complete(&current, &next);
                last_node = Some(current);

                match next {
                    NodeRef::End => break 'run StopReason::Terminated,
                    NodeRef::Node(id) => {
                        if steps >= self.max_steps {
                            break 'run StopReason::IterationLimitReached {
                                max_steps: self.max_steps,
                            };
                        }
                        current = id;
                    }
                }
            }
        };

        RunOutcome {
            state,
            reason,
            steps,
            last_node,
        }
    }

    /// Invokes one handler, through the middleware when one is attached.
    async fn call_node(
        &self,
        node_id: &str,
        node: &Arc<dyn Node<S>>,
        state: &S,
    ) -> Result<S::Update, AgentError> {
        match &self.middleware {
            Some(middleware) => {
                let node = Arc::clone(node);
                middleware
                    .around_run(
                        node_id,
                        state.clone(),
                        Box::new(move |s: S| -> NodeFuture<S::Update> {
                            Box::pin(async move { node.run(&s).await })
                        }),
                    )
                    .await
            }
            None => node.run(state).await,
        }
    }

    /// Logs the outcome and hands it to the checkpointer when the run has a thread id.
    async fn finish(&self, outcome: &RunOutcome<S>, options: &InvokeOptions) {
        match &outcome.reason {
            StopReason::Failed(e) => log_graph_error(e, outcome.steps),
            reason => log_graph_complete(reason, outcome.steps),
        }

        if let (Some(cp), Some(thread_id)) = (&self.checkpointer, options.thread_id.as_deref()) {
            let checkpoint = Checkpoint::from_outcome(outcome);
            if let Err(error) = cp.put(thread_id, &checkpoint).await {
                tracing::warn!(%error, thread_id, "failed to save checkpoint");
            }
        }
    }
}
