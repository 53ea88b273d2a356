//! State graph: nodes, routers, compile and run.
//!
//! Build a [`StateGraph`], compile it into an immutable [`CompiledStateGraph`],
//! then `invoke` it with an initial state. Each run returns a [`RunOutcome`].

mod compile_error;
mod compiled;
mod fn_node;
mod logging;
mod node;
mod node_middleware;
mod node_ref;
mod options;
mod outcome;
mod router;
mod run_context;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use fn_node::FnNode;
pub use node::Node;
pub use node_middleware::{NodeCall, NodeFuture, NodeMiddleware};
pub use node_ref::NodeRef;
pub use options::InvokeOptions;
pub use outcome::{RunError, RunOutcome, StopReason};
pub use router::{NextAgentRouter, Router};
pub use state_graph::{StateGraph, DEFAULT_MAX_STEPS, END, START};
