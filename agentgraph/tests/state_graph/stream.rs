//! stream(): per-step Values / Updates events and the final Finished event.

use std::collections::HashSet;

use agentgraph::{AgentState, InvokeOptions, StateGraph, StopReason, StreamEvent, StreamMode, START};
use tokio_stream::StreamExt;

use crate::common::{self_loop, two_stage};

/// **Scenario**: Values mode emits one snapshot per step, then Finished.
#[tokio::test]
async fn stream_values_then_finished() {
    let graph = two_stage().compile().expect("graph compiles");
    let events: Vec<_> = graph
        .stream(AgentState::new("t1"), InvokeOptions::new(), [StreamMode::Values])
        .collect()
        .await;

    assert_eq!(events.len(), 3);
    match &events[0] {
        StreamEvent::Values(s) => assert_eq!(s.messages.len(), 1),
        other => panic!("expected Values, got {:?}", other),
    }
    match &events[1] {
        StreamEvent::Values(s) => assert_eq!(s.messages.len(), 2),
        other => panic!("expected Values, got {:?}", other),
    }
    match &events[2] {
        StreamEvent::Finished { reason, steps } => {
            assert_eq!(reason, &StopReason::Terminated);
            assert_eq!(*steps, 2);
        }
        other => panic!("expected Finished, got {:?}", other),
    }
}

/// **Scenario**: Updates mode carries the node id and only what that node returned.
#[tokio::test]
async fn stream_updates_carry_node_ids() {
    let graph = two_stage().compile().expect("graph compiles");
    let events: Vec<_> = graph
        .stream(AgentState::new("t1"), InvokeOptions::new(), [StreamMode::Updates])
        .collect()
        .await;

    let ids: Vec<&str> = events
        .iter()
        .filter_map(|e| match e {
            StreamEvent::Updates { node_id, update } => {
                assert_eq!(update.messages.as_ref().map(Vec::len), Some(1));
                Some(node_id.as_str())
            }
            _ => None,
        })
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

/// **Scenario**: Both modes emit two events per step; with no modes selected, only Finished arrives.
#[tokio::test]
async fn stream_finished_reports_step_cap() {
    let mut graph = StateGraph::<AgentState>::new().with_max_steps(2);
    graph
        .add_node("loop", self_loop("loop"))
        .add_edge(START, "loop")
        .add_next_agent_edges("loop");
    let graph = graph.compile().expect("graph compiles");

    let both: Vec<_> = graph
        .stream(
            AgentState::new("t1"),
            InvokeOptions::new(),
            [StreamMode::Values, StreamMode::Updates],
        )
        .collect()
        .await;
    assert_eq!(both.len(), 5);

    let none: Vec<_> = graph
        .stream(AgentState::new("t1"), InvokeOptions::new(), HashSet::<StreamMode>::new())
        .collect()
        .await;
    assert_eq!(none.len(), 1);
    assert!(matches!(
        none.last(),
        Some(StreamEvent::Finished {
            reason: StopReason::IterationLimitReached { max_steps: 2 },
            steps: 2,
        })
    ));
}
