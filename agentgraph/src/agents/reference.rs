//! The reference supervisor graph and its linear pipeline.

use std::sync::Arc;

use crate::graph::{CompilationError, CompiledStateGraph, StateGraph, DEFAULT_MAX_STEPS, END};
use crate::state::AgentState;

use super::{
    Decider, StageNode, SupervisorNode, AGGREGATOR, CODER, DEFAULT_ITERATION_CAP, RESEARCHER,
    REVIEWER, SUPERVISOR,
};

/// Limits and marker for the reference graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceGraphConfig {
    pub max_steps: usize,
    /// Supervisor iteration at which it hands over to the aggregator.
    pub iteration_cap: u32,
    pub terminal_marker: String,
}

impl Default for ReferenceGraphConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            iteration_cap: DEFAULT_ITERATION_CAP,
            terminal_marker: END.to_string(),
        }
    }
}

/// Registers the four pipeline stages: researcher → coder → reviewer → aggregator → end.
///
/// The first three follow their own `next_agent` nomination; the aggregator has
/// a direct edge to the terminal marker.
fn add_pipeline(graph: &mut StateGraph<AgentState>, terminal_marker: &str) {
    graph
        .add_node(
            RESEARCHER,
            Arc::new(StageNode::new(
                RESEARCHER,
                "[Researcher] Analysis complete.",
                CODER,
            )),
        )
        .add_node(
            CODER,
            Arc::new(StageNode::new(
                CODER,
                "[Coder] Implementation complete.",
                REVIEWER,
            )),
        )
        .add_node(
            REVIEWER,
            Arc::new(StageNode::new(
                REVIEWER,
                "[Reviewer] Review complete.",
                AGGREGATOR,
            )),
        )
        .add_node(
            AGGREGATOR,
            Arc::new(StageNode::new(
                AGGREGATOR,
                "[Aggregator] Final results compiled.",
                terminal_marker,
            )),
        )
        .add_next_agent_edges(RESEARCHER)
        .add_next_agent_edges(CODER)
        .add_next_agent_edges(REVIEWER)
        .add_edge(AGGREGATOR, terminal_marker);
}

/// Uncompiled supervisor graph, for callers that attach middleware or a checkpointer.
pub fn reference_state_graph(
    decider: Arc<dyn Decider>,
    config: &ReferenceGraphConfig,
) -> StateGraph<AgentState> {
    let mut graph = StateGraph::new()
        .with_max_steps(config.max_steps)
        .with_terminal_marker(config.terminal_marker.clone());
    graph.add_node(
        SUPERVISOR,
        Arc::new(SupervisorNode::new(decider).with_iteration_cap(config.iteration_cap)),
    );
    add_pipeline(&mut graph, &config.terminal_marker);
    graph
        .set_entry_point(SUPERVISOR)
        .add_next_agent_edges(SUPERVISOR);
    graph
}

/// Supervisor entry followed by the pipeline. With [`FixedDecider`](super::FixedDecider)
/// a run takes five steps and leaves four messages.
pub fn build_reference_graph(
    decider: Arc<dyn Decider>,
    config: &ReferenceGraphConfig,
) -> Result<CompiledStateGraph<AgentState>, CompilationError> {
    reference_state_graph(decider, config).compile()
}

/// The pipeline alone, entered at the researcher.
pub fn build_pipeline_graph(
    config: &ReferenceGraphConfig,
) -> Result<CompiledStateGraph<AgentState>, CompilationError> {
    let mut graph = StateGraph::new()
        .with_max_steps(config.max_steps)
        .with_terminal_marker(config.terminal_marker.clone());
    add_pipeline(&mut graph, &config.terminal_marker);
    graph.set_entry_point(RESEARCHER);
    graph.compile()
}
