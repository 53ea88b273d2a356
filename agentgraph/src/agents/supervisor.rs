//! Supervisor node: bumps the iteration counter and nominates the next agent.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::Node;
use crate::state::{AgentState, PartialState};

use super::{Decider, AGGREGATOR, SUPERVISOR};

/// Iteration at which the supervisor stops consulting its decider and hands
/// over to aggregation. Equal to the executor's default step cap.
pub const DEFAULT_ITERATION_CAP: u32 = 10;

/// Supervisor: once `iteration >= cap`, routes to the aggregator regardless of
/// content; otherwise asks its [`Decider`]. Every call increments `iteration`.
///
/// **Interaction**: Implements `Node<AgentState>`; its update's `next_agent` is
/// read by the next-agent router bound to it.
pub struct SupervisorNode {
    decider: Arc<dyn Decider>,
    iteration_cap: u32,
    aggregator: String,
}

impl SupervisorNode {
    pub fn new(decider: Arc<dyn Decider>) -> Self {
        Self {
            decider,
            iteration_cap: DEFAULT_ITERATION_CAP,
            aggregator: AGGREGATOR.to_string(),
        }
    }

    pub fn with_iteration_cap(self, iteration_cap: u32) -> Self {
        Self {
            iteration_cap,
            ..self
        }
    }

    pub fn with_aggregator(self, aggregator: impl Into<String>) -> Self {
        Self {
            aggregator: aggregator.into(),
            ..self
        }
    }
}

#[async_trait]
impl Node<AgentState> for SupervisorNode {
    fn id(&self) -> &str {
        SUPERVISOR
    }

    async fn run(&self, state: &AgentState) -> Result<PartialState, AgentError> {
        let next = if state.iteration >= self.iteration_cap {
            self.aggregator.clone()
        } else {
            self.decider.decide(state).await?
        };
        tracing::debug!(iteration = state.iteration, next = %next, "supervisor decision");
        Ok(PartialState::new()
            .with_next_agent(next)
            .with_iteration(state.iteration.saturating_add(1)))
    }
}
