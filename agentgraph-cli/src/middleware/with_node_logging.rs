//! Extension trait for fluent API: attach node logging middleware then compile.
//!
//! Interacts with [`StateGraph`](agentgraph::StateGraph), [`AgentState`](agentgraph::AgentState),
//! and [`LoggingMiddleware`](super::logging::LoggingMiddleware).

use std::sync::Arc;

use agentgraph::{AgentState, StateGraph};

use super::logging::LoggingMiddleware;

/// Extension trait for fluent API: attach node logging middleware then compile.
pub trait WithNodeLogging {
    /// Returns the same graph with `LoggingMiddleware` attached. Chain with `.compile()?`.
    fn with_node_logging(self) -> Self;
}

impl WithNodeLogging for StateGraph<AgentState> {
    fn with_node_logging(self) -> Self {
        self.with_middleware(Arc::new(LoggingMiddleware))
    }
}
