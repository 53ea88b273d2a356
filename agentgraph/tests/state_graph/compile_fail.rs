//! StateGraph compile failure cases: unknown node, duplicates, dangling nodes, limits.

use std::sync::Arc;

use agentgraph::{AgentState, CompilationError, NodeRef, StateGraph, END, START};

use crate::common::stage;

/// **Scenario**: A direct edge to an unregistered node fails compilation naming that node.
#[tokio::test]
async fn compile_fails_when_edge_refers_to_unknown_node() {
    let mut graph = StateGraph::<AgentState>::new();
    graph.add_node("echo", stage("echo", END));
    graph.add_edge(START, "echo");
    graph.add_edge("echo", "missing");

    match graph.compile() {
        Err(CompilationError::NodeNotFound(id)) => assert_eq!(id, "missing"),
        _ => panic!("expected NodeNotFound"),
    }
}

/// **Scenario**: Registering the same id twice fails compile.
#[test]
fn compile_fails_on_duplicate_node() {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("a", stage("a", END))
        .add_node("a", stage("a", END))
        .add_edge(START, "a")
        .add_edge("a", END);
    assert_eq!(
        graph.compile().err(),
        Some(CompilationError::DuplicateNode("a".into()))
    );
}

/// **Scenario**: A node with neither router nor successor fails compile.
#[test]
fn compile_fails_on_dangling_node() {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("a", stage("a", "b"))
        .add_node("b", stage("b", END))
        .add_edge(START, "a")
        .add_edge("a", "b");
    assert_eq!(
        graph.compile().err(),
        Some(CompilationError::DanglingNode("b".into()))
    );
}

/// **Scenario**: No entry point fails compile; an unknown entry point is NodeNotFound.
#[test]
fn compile_fails_without_valid_entry_point() {
    let mut graph = StateGraph::<AgentState>::new();
    graph.add_node("a", stage("a", END)).add_edge("a", END);
    assert_eq!(graph.compile().err(), Some(CompilationError::MissingEntryPoint));

    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("a", stage("a", END))
        .add_edge("a", END)
        .set_entry_point("ghost");
    assert_eq!(
        graph.compile().err(),
        Some(CompilationError::NodeNotFound("ghost".into()))
    );
}

/// **Scenario**: An edge from an unregistered node fails compile.
#[test]
fn compile_fails_on_edge_from_unknown_node() {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("a", stage("a", END))
        .add_edge(START, "a")
        .add_edge("a", END)
        .add_next_agent_edges("ghost");
    assert_eq!(
        graph.compile().err(),
        Some(CompilationError::NodeNotFound("ghost".into()))
    );
}

/// **Scenario**: Binding both a direct edge and a router to one node is a conflict.
#[test]
fn compile_fails_on_conflicting_bindings() {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("a", stage("a", END))
        .add_edge(START, "a")
        .add_edge("a", END)
        .add_conditional_edges("a", Arc::new(|_: &AgentState| NodeRef::End));
    assert_eq!(
        graph.compile().err(),
        Some(CompilationError::ConflictingEdges("a".into()))
    );
}

/// **Scenario**: Two entry points conflict.
#[test]
fn compile_fails_on_two_entry_points() {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("a", stage("a", END))
        .add_node("b", stage("b", END))
        .add_edge(START, "a")
        .add_edge(START, "b")
        .add_edge("a", END)
        .add_edge("b", END);
    assert_eq!(
        graph.compile().err(),
        Some(CompilationError::ConflictingEdges(START.into()))
    );
}

/// **Scenario**: max_steps = 0 is rejected.
#[test]
fn compile_fails_on_zero_max_steps() {
    let mut graph = StateGraph::<AgentState>::new().with_max_steps(0);
    graph.add_node("a", stage("a", END)).add_edge(START, "a").add_edge("a", END);
    assert_eq!(graph.compile().err(), Some(CompilationError::InvalidMaxSteps));
}
