//! Invoke: step loop, routing, termination and run-fatal outcomes.

use std::sync::Arc;

use agentgraph::{
    AgentError, AgentState, FnNode, Message, NodeRef, PartialState, RunError, StateGraph,
    StopReason, END, START,
};

use crate::common::{contents, failing, stage, two_stage};

/// **Scenario**: A two-node chain runs both nodes once and terminates.
#[tokio::test]
async fn invoke_two_stage_terminates() {
    let graph = two_stage().compile().expect("graph compiles");
    let outcome = graph.invoke(AgentState::new("t1")).await;
    assert_eq!(outcome.reason, StopReason::Terminated);
    assert_eq!(outcome.steps, 2);
    assert_eq!(outcome.last_node.as_deref(), Some("b"));
    assert_eq!(contents(&outcome.state), vec!["a", "b"]);
    assert_eq!(outcome.state.task_id, "t1");
}

/// **Scenario**: A node that returns no nomination ends the run (default route is terminal).
#[tokio::test]
async fn absent_nomination_terminates() {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node(
            "quiet",
            Arc::new(FnNode::new("quiet", |_: &AgentState| {
                Ok(PartialState::new().with_message(Message::assistant("quiet")))
            })),
        )
        .add_edge(START, "quiet")
        .add_next_agent_edges("quiet");
    let outcome = graph.compile().expect("graph compiles").invoke(AgentState::new("t1")).await;
    assert!(outcome.is_terminated());
    assert_eq!(outcome.steps, 1);
}

/// **Scenario**: Routing to an unregistered node fails with UnknownNode and keeps prior messages.
#[tokio::test]
async fn unknown_target_fails_run() {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("a", stage("a", "ghost"))
        .add_edge(START, "a")
        .add_next_agent_edges("a");
    let outcome = graph.compile().expect("graph compiles").invoke(AgentState::new("t1")).await;
    assert_eq!(
        outcome.reason,
        StopReason::Failed(RunError::UnknownNode("ghost".into()))
    );
    assert_eq!(outcome.steps, 1);
    assert_eq!(contents(&outcome.state), vec!["a"]);
}

/// **Scenario**: A handler failure stops the run with the node name and cause; earlier merges survive.
#[tokio::test]
async fn handler_failure_preserves_cause_and_state() {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("a", stage("a", "boom"))
        .add_node("boom", failing("boom", "disk full"))
        .add_edge(START, "a")
        .add_next_agent_edges("a")
        .add_edge("boom", END);
    let outcome = graph.compile().expect("graph compiles").invoke(AgentState::new("t1")).await;
    assert_eq!(
        outcome.error(),
        Some(&RunError::NodeExecution {
            node: "boom".into(),
            source: AgentError::ExecutionFailed("disk full".into()),
        })
    );
    assert_eq!(outcome.steps, 1);
    assert_eq!(outcome.last_node.as_deref(), Some("a"));
    assert_eq!(contents(&outcome.state), vec!["a"]);
}

/// **Scenario**: A custom router is consulted on the merged state after every step.
#[tokio::test]
async fn conditional_router_sees_merged_state() {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node(
            "count",
            Arc::new(FnNode::new("count", |s: &AgentState| {
                Ok(PartialState::new().with_iteration(s.iteration + 1))
            })),
        )
        .add_edge(START, "count")
        .add_conditional_edges(
            "count",
            Arc::new(|s: &AgentState| {
                if s.iteration >= 3 {
                    NodeRef::End
                } else {
                    NodeRef::node("count")
                }
            }),
        );
    let outcome = graph.compile().expect("graph compiles").invoke(AgentState::new("t1")).await;
    assert!(outcome.is_terminated());
    assert_eq!(outcome.steps, 3);
    assert_eq!(outcome.state.iteration, 3);
}

/// **Scenario**: A direct edge wins over the node's own nomination.
#[tokio::test]
async fn direct_edge_ignores_nomination() {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("a", stage("a", "a"))
        .add_node("b", stage("b", "a"))
        .add_edge(START, "a")
        .add_edge("a", "b")
        .add_edge("b", END);
    let outcome = graph.compile().expect("graph compiles").invoke(AgentState::new("t1")).await;
    assert!(outcome.is_terminated());
    assert_eq!(contents(&outcome.state), vec!["a", "b"]);
}

/// **Scenario**: With a custom terminal marker, nominating it ends the run.
#[tokio::test]
async fn custom_terminal_marker_ends_run() {
    let mut graph = StateGraph::<AgentState>::new().with_terminal_marker("DONE");
    graph
        .add_node("a", stage("a", "DONE"))
        .add_edge(START, "a")
        .add_next_agent_edges("a");
    let outcome = graph.compile().expect("graph compiles").invoke(AgentState::new("t1")).await;
    assert!(outcome.is_terminated());
    assert_eq!(outcome.state.next_agent.as_deref(), Some("DONE"));
}

/// **Scenario**: An update that rewrites task_id fails the run with a schema error.
#[tokio::test]
async fn task_id_rewrite_fails_run() {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node(
            "hijack",
            Arc::new(FnNode::new("hijack", |_: &AgentState| {
                Ok(PartialState::new().with_task_id("other"))
            })),
        )
        .add_edge(START, "hijack")
        .add_edge("hijack", END);
    let outcome = graph.compile().expect("graph compiles").invoke(AgentState::new("t1")).await;
    assert!(matches!(
        outcome.reason,
        StopReason::Failed(RunError::Schema { ref node, .. }) if node == "hijack"
    ));
    assert_eq!(outcome.state.task_id, "t1");
    assert_eq!(outcome.steps, 0);
}
