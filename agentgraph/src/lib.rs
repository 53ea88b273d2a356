//! # agentgraph
//!
//! A small directed-graph execution engine for multi-agent workflows. One shared
//! state flows through named nodes; each node returns a sparse update, the
//! engine merges it, and a router bound to the node picks the next one. A hard
//! step cap guarantees every run stops.
//!
//! ## Main Modules
//!
//! - [`state`]: `GraphState`, the reference `AgentState` / `PartialState` and merge rules.
//! - [`graph`]: `StateGraph` builder, `CompiledStateGraph` executor, `Node`, `Router`, outcomes.
//! - [`agents`]: supervisor and pipeline nodes, `Decider`, and the reference graph.
//! - [`host`]: task submission and health collaborators used by host processes.
//! - [`memory`]: `Checkpointer` and the in-memory `MemorySaver`.
//! - [`stream`]: per-step events for `CompiledStateGraph::stream`.
//! - [`llm`]: `LlmClient` and `MockLlm` for model-backed routing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use agentgraph::{build_reference_graph, AgentState, FixedDecider, ReferenceGraphConfig};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let graph = build_reference_graph(
//!     Arc::new(FixedDecider::default()),
//!     &ReferenceGraphConfig::default(),
//! )
//! .expect("reference graph compiles");
//! let outcome = graph.invoke(AgentState::new("t1")).await;
//! for m in &outcome.state.messages {
//!     println!("{}", m.content());
//! }
//! println!("{}", outcome.reason);
//! # }
//! ```

pub mod agents;
pub mod error;
pub mod graph;
pub mod host;
pub mod llm;
pub mod memory;
pub mod message;
pub mod state;
pub mod stream;

pub use agents::{
    build_pipeline_graph, build_reference_graph, reference_state_graph, Decider, FixedDecider,
    LlmDecider, ReferenceGraphConfig, StageNode, SupervisorNode,
};
pub use error::AgentError;
pub use graph::{
    CompilationError, CompiledStateGraph, FnNode, InvokeOptions, NextAgentRouter, Node,
    NodeMiddleware, NodeRef, Router, RunError, RunOutcome, StateGraph, StopReason, END, START,
};
pub use host::{
    FileTaskStore, HealthReport, HealthStatus, InMemoryTaskStore, Priority, TaskAck,
    TaskDescriptor, TaskStore, TaskStoreError,
};
pub use llm::{LlmClient, LlmResponse, MockLlm};
pub use memory::{
    Checkpoint, CheckpointError, CheckpointListItem, CheckpointMetadata, Checkpointer, MemorySaver,
};
pub use message::Message;
pub use state::{AgentState, Field, GraphState, MergeStrategy, PartialState, SchemaError};
pub use stream::{StreamEvent, StreamMode};
