//! State graph builder: nodes, entry point, per-node routing, limits.
//!
//! Add nodes with `add_node`, set the entry with `add_edge(START, id)` (or
//! `set_entry_point`), bind each node to either a direct successor
//! (`add_edge(from, to)`, `END` to stop) or a router (`add_conditional_edges`,
//! `add_next_agent_edges`), then `compile` to get an immutable
//! `CompiledStateGraph`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::{CompiledStateGraph, Edge, NodeEntry};
use crate::graph::node::Node;
use crate::graph::node_middleware::NodeMiddleware;
use crate::graph::{NextAgentRouter, NodeRef, Router};
use crate::memory::Checkpointer;
use crate::state::GraphState;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Default terminal marker: use as `to_id` in `add_edge(last_node_id, END)` and
/// as the `next_agent` value that ends a run.
pub const END: &str = "__end__";

/// Default step cap, matching the supervisor's own iteration cap.
pub const DEFAULT_MAX_STEPS: usize = 10;

/// Outgoing binding recorded at build time; resolved against the node set in `compile`.
enum EdgeSpec<S> {
    Direct(String),
    Conditional(Arc<dyn Router<S>>),
    NextAgent,
}

/// State graph under construction.
///
/// Generic over a [`GraphState`] `S`. Nothing is validated until `compile`,
/// which fails closed on the first problem found.
///
/// **Interaction**: Accepts `Arc<dyn Node<S>>` and `Arc<dyn Router<S>>`;
/// produces `CompiledStateGraph<S>`.
pub struct StateGraph<S>
where
    S: GraphState,
{
    /// Registration order is kept so duplicate and dangling checks are deterministic.
    nodes: Vec<(String, Arc<dyn Node<S>>)>,
    entry_points: Vec<String>,
    edges: Vec<(String, EdgeSpec<S>)>,
    max_steps: usize,
    terminal_marker: String,
    middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> Default for StateGraph<S>
where
    S: GraphState,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: GraphState,
{
    /// Creates an empty graph with `max_steps = 10` and terminal marker [`END`].
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            entry_points: Vec::new(),
            edges: Vec::new(),
            max_steps: DEFAULT_MAX_STEPS,
            terminal_marker: END.to_string(),
            middleware: None,
        }
    }

    /// Sets the maximum number of steps a run may take. Must be at least 1.
    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Self { max_steps, ..self }
    }

    /// Sets the value that means "stop" in `next_agent` and as an edge target.
    /// [`END`] is always accepted as a direct edge target as well.
    pub fn with_terminal_marker(self, marker: impl Into<String>) -> Self {
        Self {
            terminal_marker: marker.into(),
            ..self
        }
    }

    /// Attaches node middleware; `compile()` carries it into the compiled graph.
    pub fn with_middleware(self, middleware: Arc<dyn NodeMiddleware<S>>) -> Self {
        Self {
            middleware: Some(middleware),
            ..self
        }
    }

    pub fn terminal_marker(&self) -> &str {
        &self.terminal_marker
    }

    /// Registers a node. Ids must be unique; a duplicate fails `compile`.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S>>) -> &mut Self {
        self.nodes.push((id.into(), node));
        self
    }

    /// Sets the node every run starts at. Same as `add_edge(START, id)`.
    pub fn set_entry_point(&mut self, id: impl Into<String>) -> &mut Self {
        self.entry_points.push(id.into());
        self
    }

    /// Adds an unconditional edge from `from_id` to `to_id`.
    ///
    /// `START` as `from_id` sets the entry point; `END` (or the configured
    /// terminal marker) as `to_id` stops the run after `from_id`.
    pub fn add_edge(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) -> &mut Self {
        let from_id = from_id.into();
        if from_id == START {
            return self.set_entry_point(to_id);
        }
        self.edges.push((from_id, EdgeSpec::Direct(to_id.into())));
        self
    }

    /// Binds a router to `from_id`: after that node runs, the router picks the next node.
    pub fn add_conditional_edges(
        &mut self,
        from_id: impl Into<String>,
        router: Arc<dyn Router<S>>,
    ) -> &mut Self {
        self.edges
            .push((from_id.into(), EdgeSpec::Conditional(router)));
        self
    }

    /// Binds the default next-agent router (using this graph's terminal marker) to `from_id`.
    pub fn add_next_agent_edges(&mut self, from_id: impl Into<String>) -> &mut Self {
        self.edges.push((from_id.into(), EdgeSpec::NextAgent));
        self
    }

    /// Builds the executable graph.
    ///
    /// Returns `CompilationError` for duplicate ids, a missing or unknown entry
    /// point, edges from or to unknown nodes, more than one binding per node,
    /// nodes without any binding, or `max_steps == 0`.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        self.compile_internal(None, None)
    }

    /// Builds the executable graph with a checkpointer. Runs invoked with a
    /// `thread_id` save their final state when they stop.
    pub fn compile_with_checkpointer(
        self,
        checkpointer: Arc<dyn Checkpointer<S>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        self.compile_internal(Some(checkpointer), None)
    }

    /// Builds the executable graph with node middleware wrapping every handler call.
    pub fn compile_with_middleware(
        self,
        middleware: Arc<dyn NodeMiddleware<S>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        self.compile_internal(None, Some(middleware))
    }

    fn compile_internal(
        self,
        checkpointer: Option<Arc<dyn Checkpointer<S>>>,
        middleware: Option<Arc<dyn NodeMiddleware<S>>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        if self.max_steps == 0 {
            return Err(CompilationError::InvalidMaxSteps);
        }

        let mut seen = HashSet::new();
        for (id, _) in &self.nodes {
            if !seen.insert(id.as_str()) {
                return Err(CompilationError::DuplicateNode(id.clone()));
            }
        }

        let entry = match self.entry_points.as_slice() {
            [] => return Err(CompilationError::MissingEntryPoint),
            [only] => only.clone(),
            _ => return Err(CompilationError::ConflictingEdges(START.to_string())),
        };
        if !seen.contains(entry.as_str()) {
            return Err(CompilationError::NodeNotFound(entry));
        }

        let mut bindings: HashMap<String, Edge<S>> = HashMap::new();
        for (from, spec) in self.edges {
            if !seen.contains(from.as_str()) {
                return Err(CompilationError::NodeNotFound(from));
            }
            if bindings.contains_key(&from) {
                return Err(CompilationError::ConflictingEdges(from));
            }
            let edge = match spec {
                EdgeSpec::Direct(to) if to == END || to == self.terminal_marker => {
                    Edge::Direct(NodeRef::End)
                }
                EdgeSpec::Direct(to) => {
                    if !seen.contains(to.as_str()) {
                        return Err(CompilationError::NodeNotFound(to));
                    }
                    Edge::Direct(NodeRef::Node(to))
                }
                EdgeSpec::Conditional(router) => Edge::Conditional(router),
                EdgeSpec::NextAgent => Edge::Conditional(Arc::new(NextAgentRouter::new(
                    self.terminal_marker.clone(),
                ))),
            };
            bindings.insert(from, edge);
        }

        let mut nodes = HashMap::with_capacity(self.nodes.len());
        for (id, node) in self.nodes {
            let edge = bindings
                .remove(&id)
                .ok_or_else(|| CompilationError::DanglingNode(id.clone()))?;
            nodes.insert(id, NodeEntry { node, edge });
        }

        Ok(CompiledStateGraph {
            nodes: Arc::new(nodes),
            entry,
            max_steps: self.max_steps,
            terminal_marker: self.terminal_marker,
            checkpointer,
            middleware: middleware.or(self.middleware),
        })
    }
}
