//! Node middleware: compile_with_middleware and with_middleware().compile().

use std::sync::{Arc, Mutex};

use agentgraph::graph::NodeCall;
use agentgraph::{
    AgentError, AgentState, Message, NodeMiddleware, PartialState, RunError, StateGraph,
    StopReason, END, START,
};
use async_trait::async_trait;

use crate::common::{contents, stage, two_stage};

/// Records every node id it wraps, before and after the call.
#[derive(Default)]
struct RecordingMiddleware {
    log: Mutex<Vec<String>>,
}

impl RecordingMiddleware {
    fn entries(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl NodeMiddleware<AgentState> for RecordingMiddleware {
    async fn around_run(
        &self,
        node_id: &str,
        state: AgentState,
        inner: NodeCall<AgentState, PartialState>,
    ) -> Result<PartialState, AgentError> {
        self.log.lock().unwrap().push(format!("enter {}", node_id));
        let result = inner(state).await;
        self.log.lock().unwrap().push(format!("exit {}", node_id));
        result
    }
}

/// Appends a marker message to every update passing through.
struct TaggingMiddleware;

#[async_trait]
impl NodeMiddleware<AgentState> for TaggingMiddleware {
    async fn around_run(
        &self,
        node_id: &str,
        state: AgentState,
        inner: NodeCall<AgentState, PartialState>,
    ) -> Result<PartialState, AgentError> {
        let update = inner(state).await?;
        Ok(update.with_message(Message::system(format!("via {}", node_id))))
    }
}

/// Refuses to call the node for one id.
struct BlockingMiddleware {
    blocked: &'static str,
}

#[async_trait]
impl NodeMiddleware<AgentState> for BlockingMiddleware {
    async fn around_run(
        &self,
        node_id: &str,
        state: AgentState,
        inner: NodeCall<AgentState, PartialState>,
    ) -> Result<PartialState, AgentError> {
        if node_id == self.blocked {
            return Err(AgentError::ExecutionFailed(format!("{} blocked", node_id)));
        }
        inner(state).await
    }
}

/// **Scenario**: compile_with_middleware wraps every handler call in order.
#[tokio::test]
async fn compile_with_middleware_wraps_each_node() {
    let mw = Arc::new(RecordingMiddleware::default());
    let graph = two_stage()
        .compile_with_middleware(mw.clone())
        .expect("graph compiles");
    let outcome = graph.invoke(AgentState::new("t1")).await;
    assert!(outcome.is_terminated());
    assert_eq!(
        mw.entries(),
        vec!["enter a", "exit a", "enter b", "exit b"]
    );
}

/// **Scenario**: with_middleware().compile() carries the middleware; its changes to updates are merged.
#[tokio::test]
async fn with_middleware_then_compile_merges_modified_update() {
    let mut graph = StateGraph::<AgentState>::new().with_middleware(Arc::new(TaggingMiddleware));
    graph
        .add_node("a", stage("a", END))
        .add_edge(START, "a")
        .add_next_agent_edges("a");
    let outcome = graph.compile().expect("graph compiles").invoke(AgentState::new("t1")).await;
    assert_eq!(contents(&outcome.state), vec!["a", "via a"]);
}

/// **Scenario**: An error from middleware fails the run like a handler error.
#[tokio::test]
async fn middleware_error_fails_run() {
    let graph = two_stage()
        .compile_with_middleware(Arc::new(BlockingMiddleware { blocked: "b" }))
        .expect("graph compiles");
    let outcome = graph.invoke(AgentState::new("t1")).await;
    assert!(matches!(
        outcome.reason,
        StopReason::Failed(RunError::NodeExecution { ref node, .. }) if node == "b"
    ));
    assert_eq!(contents(&outcome.state), vec!["a"]);
}
