//! Shared nodes and builders for state graph integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use agentgraph::{AgentError, AgentState, FnNode, Message, Node, PartialState, StateGraph, END, START};

/// Node that appends its own id as a message and nominates `next`.
pub fn stage(id: &'static str, next: &'static str) -> Arc<dyn Node<AgentState>> {
    Arc::new(FnNode::new(id, move |_: &AgentState| {
        Ok(PartialState::new()
            .with_message(Message::assistant(id))
            .with_next_agent(next))
    }))
}

/// Node that always nominates itself.
pub fn self_loop(id: &'static str) -> Arc<dyn Node<AgentState>> {
    Arc::new(FnNode::new(id, move |s: &AgentState| {
        Ok(PartialState::new()
            .with_message(Message::assistant(format!("{} #{}", id, s.messages.len())))
            .with_next_agent(id))
    }))
}

/// Node whose handler always fails.
pub fn failing(id: &'static str, cause: &'static str) -> Arc<dyn Node<AgentState>> {
    Arc::new(FnNode::new(id, move |_: &AgentState| {
        Err(AgentError::ExecutionFailed(cause.to_string()))
    }))
}

/// `a` → `b` → end, both bound to the next-agent router.
pub fn two_stage() -> StateGraph<AgentState> {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("a", stage("a", "b"))
        .add_node("b", stage("b", END))
        .add_edge(START, "a")
        .add_next_agent_edges("a")
        .add_next_agent_edges("b");
    graph
}

pub fn contents(state: &AgentState) -> Vec<&str> {
    state.messages.iter().map(Message::content).collect()
}
