//! Graph node trait: one step in a StateGraph.
//!
//! Receives a read-only view of the full state and returns a sparse update.
//! Routing is not the node's job: the update may nominate a next agent, and the
//! router bound to the node at build time turns the merged state into a target.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::state::GraphState;

/// One step in a graph: state in, partial update out.
///
/// Nodes are registered once and invoked any number of times, possibly by
/// several concurrent runs. Implementations must not keep per-run mutable state.
///
/// **Interaction**: Registered via `StateGraph::add_node`; invoked by
/// `CompiledStateGraph::invoke` (optionally through a `NodeMiddleware`).
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: GraphState,
{
    /// Node id (e.g. `"supervisor"`, `"researcher"`).
    fn id(&self) -> &str;

    /// One step: read the state, return only the fields this node changes.
    ///
    /// Return `Err` only for unrecoverable failures; the run stops as `Failed`
    /// with this node's name attached.
    async fn run(&self, state: &S) -> Result<S::Update, AgentError>;
}
