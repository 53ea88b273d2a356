//! Node backed by a plain function or closure.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::state::GraphState;

use super::Node;

/// Adapts a synchronous handler `Fn(&S) -> Result<S::Update, AgentError>` into a [`Node`].
///
/// Handy for deterministic pipeline steps and tests; nodes that await I/O
/// implement `Node` directly.
pub struct FnNode<F> {
    id: String,
    handler: F,
}

impl<F> FnNode<F> {
    pub fn new(id: impl Into<String>, handler: F) -> Self {
        Self {
            id: id.into(),
            handler,
        }
    }
}

#[async_trait]
impl<S, F> Node<S> for FnNode<F>
where
    S: GraphState,
    F: Fn(&S) -> Result<S::Update, AgentError> + Send + Sync,
{
    fn id(&self) -> &str {
        &self.id
    }

    async fn run(&self, state: &S) -> Result<S::Update, AgentError> {
        (self.handler)(state)
    }
}
