//! Routers: resolve the next node from the merged state.
//!
//! A router is bound per source node at build time (conditional edge). The
//! default policy reads the state's `next_agent` nomination.

use crate::state::GraphState;

use super::NodeRef;

/// Resolves the next node from post-merge state.
///
/// Routers do not check that the target exists; the executor does, since
/// targets come from state and are not known at build time.
pub trait Router<S>: Send + Sync {
    fn route(&self, state: &S) -> NodeRef;
}

impl<S, F> Router<S> for F
where
    F: Fn(&S) -> NodeRef + Send + Sync,
{
    fn route(&self, state: &S) -> NodeRef {
        self(state)
    }
}

/// Default router: follows `state.next_agent`.
///
/// Absent nomination or the terminal marker resolves to [`NodeRef::End`];
/// anything else is returned verbatim.
#[derive(Debug, Clone)]
pub struct NextAgentRouter {
    terminal_marker: String,
}

impl NextAgentRouter {
    pub fn new(terminal_marker: impl Into<String>) -> Self {
        Self {
            terminal_marker: terminal_marker.into(),
        }
    }

    pub fn terminal_marker(&self) -> &str {
        &self.terminal_marker
    }
}

impl Default for NextAgentRouter {
    fn default() -> Self {
        Self::new(super::END)
    }
}

impl<S: GraphState> Router<S> for NextAgentRouter {
    fn route(&self, state: &S) -> NodeRef {
        match state.next_agent() {
            None => NodeRef::End,
            Some(id) if id == self.terminal_marker => NodeRef::End,
            Some(id) => NodeRef::Node(id.to_string()),
        }
    }
}
