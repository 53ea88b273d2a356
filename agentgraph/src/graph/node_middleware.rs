//! Node middleware: wraps every handler call made by the executor.
//!
//! Used for cross-cutting concerns (logging, timing, metrics) without touching
//! node implementations. Attach with `StateGraph::with_middleware` or
//! `compile_with_middleware`.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::state::GraphState;

/// Boxed future returned by the wrapped handler call.
pub type NodeFuture<U> = Pin<Box<dyn Future<Output = Result<U, AgentError>> + Send>>;

/// The wrapped handler call: takes the state snapshot, yields the node's update.
pub type NodeCall<S, U> = Box<dyn FnOnce(S) -> NodeFuture<U> + Send>;

/// Around-advice for node execution.
///
/// Implementations must call `inner` at most once and return its result (or a
/// replacement error). The executor merges whatever update comes back.
#[async_trait]
pub trait NodeMiddleware<S>: Send + Sync
where
    S: GraphState,
{
    async fn around_run(
        &self,
        node_id: &str,
        state: S,
        inner: NodeCall<S, S::Update>,
    ) -> Result<S::Update, AgentError>;
}
