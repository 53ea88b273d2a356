//! Reference agents: a supervisor that routes through a pluggable decider, and
//! the fixed research → code → review → aggregate pipeline.
//!
//! [`build_reference_graph`] wires them into the default supervisor graph.

mod decider;
mod reference;
mod stage;
mod supervisor;

pub use decider::{Decider, FixedDecider, LlmDecider, ROUTER_SYSTEM_PROMPT};
pub use reference::{
    build_pipeline_graph, build_reference_graph, reference_state_graph, ReferenceGraphConfig,
};
pub use stage::StageNode;
pub use supervisor::{SupervisorNode, DEFAULT_ITERATION_CAP};

/// Entry node: decides which specialist runs next.
pub const SUPERVISOR: &str = "supervisor";
pub const RESEARCHER: &str = "researcher";
pub const CODER: &str = "coder";
pub const REVIEWER: &str = "reviewer";
/// Final node: compiles results and ends the run.
pub const AGGREGATOR: &str = "aggregator";
