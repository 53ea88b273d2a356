//! One compiled graph serving many concurrent runs.

use std::sync::Arc;
use std::time::Duration;

use agentgraph::{
    build_reference_graph, AgentError, AgentState, FixedDecider, Message, Node, PartialState,
    ReferenceGraphConfig, StateGraph, StopReason, END, START,
};
use async_trait::async_trait;

use crate::common::contents;

/// Yields to the scheduler before answering, so concurrent runs interleave.
struct YieldingNode {
    id: &'static str,
    next: &'static str,
}

#[async_trait]
impl Node<AgentState> for YieldingNode {
    fn id(&self) -> &str {
        self.id
    }

    async fn run(&self, state: &AgentState) -> Result<PartialState, AgentError> {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Ok(PartialState::new()
            .with_message(Message::assistant(format!("{}:{}", self.id, state.task_id)))
            .with_next_agent(self.next))
    }
}

/// **Scenario**: Concurrent runs on a shared graph keep their own transcripts.
#[tokio::test]
async fn concurrent_runs_do_not_share_state() {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("a", Arc::new(YieldingNode { id: "a", next: "b" }))
        .add_node("b", Arc::new(YieldingNode { id: "b", next: END }))
        .add_edge(START, "a")
        .add_next_agent_edges("a")
        .add_next_agent_edges("b");
    let graph = graph.compile().expect("graph compiles");

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let graph = graph.clone();
            tokio::spawn(async move { graph.invoke(AgentState::new(format!("t{}", i))).await })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let outcome = handle.await.expect("run task joins");
        let id = format!("t{}", i);
        assert_eq!(outcome.reason, StopReason::Terminated);
        assert_eq!(outcome.state.task_id, id);
        assert_eq!(
            contents(&outcome.state),
            vec![format!("a:{}", id), format!("b:{}", id)]
        );
    }
}

/// **Scenario**: Reference graph runs with different seeds in parallel end identically per seed.
#[tokio::test]
async fn reference_graph_parallel_runs() {
    let graph = build_reference_graph(
        Arc::new(FixedDecider::default()),
        &ReferenceGraphConfig::default(),
    )
    .expect("reference graph compiles");

    let (fresh, capped) = tokio::join!(
        graph.invoke(AgentState::new("fresh")),
        graph.invoke(AgentState::new("capped").with_iteration(10)),
    );
    assert_eq!(fresh.steps, 5);
    assert_eq!(fresh.state.messages.len(), 4);
    assert_eq!(capped.steps, 2);
    assert_eq!(capped.state.messages.len(), 1);
}
