//! Task submission: descriptors, acknowledgements and the store contract.
//!
//! A store records a descriptor keyed by `task_id` before acknowledging it.
//! Submitting the same `task_id` again replaces the earlier record in place.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::state::AgentState;

/// Budget applied when a descriptor does not set one.
pub const DEFAULT_TIMEOUT_MINUTES: u64 = 30;

fn default_timeout_minutes() -> u64 {
    DEFAULT_TIMEOUT_MINUTES
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(TaskStoreError::InvalidTask(format!(
                "unknown priority: {} (expected low, medium or high)",
                other
            ))),
        }
    }
}

/// A unit of work submitted by a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    pub task_id: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    /// Wall-clock budget for the run; 0 means unbounded.
    #[serde(default = "default_timeout_minutes")]
    pub timeout_minutes: u64,
}

impl TaskDescriptor {
    pub fn new(task_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            description: description.into(),
            priority: Priority::default(),
            timeout_minutes: DEFAULT_TIMEOUT_MINUTES,
        }
    }

    pub fn with_priority(self, priority: Priority) -> Self {
        Self { priority, ..self }
    }

    pub fn with_timeout_minutes(self, timeout_minutes: u64) -> Self {
        Self {
            timeout_minutes,
            ..self
        }
    }

    /// Seed state for a run of this task: only the task id is carried over.
    pub fn initial_state(&self) -> AgentState {
        AgentState::new(self.task_id.clone())
    }

    /// Run budget derived from `timeout_minutes`; `None` when it is 0.
    pub fn run_budget(&self) -> Option<Duration> {
        match self.timeout_minutes {
            0 => None,
            m => Some(Duration::from_secs(m.saturating_mul(60))),
        }
    }
}

/// Acknowledgement returned once a descriptor is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAck {
    pub status: String,
    pub task_id: String,
}

impl TaskAck {
    pub fn accepted(task_id: impl Into<String>) -> Self {
        Self {
            status: "accepted".to_string(),
            task_id: task_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskStoreError {
    #[error("invalid task: {0}")]
    InvalidTask(String),
    #[error("storage error: {0}")]
    Storage(String),
}

/// Durable record of submitted tasks.
///
/// **Interaction**: The CLI submits before building the graph; only the
/// acknowledged descriptor's id seeds the run.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Records `task` and acknowledges it only once the record is stored.
    /// Fails if `task_id` is empty.
    async fn submit(&self, task: TaskDescriptor) -> Result<TaskAck, TaskStoreError>;

    async fn get(&self, task_id: &str) -> Result<Option<TaskDescriptor>, TaskStoreError>;

    /// All recorded descriptors. Order is defined by the implementation.
    async fn list(&self) -> Result<Vec<TaskDescriptor>, TaskStoreError>;
}

/// In-process task store. Records live as long as the store; `list` keeps
/// first-submission order.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: RwLock<Vec<TaskDescriptor>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn submit(&self, task: TaskDescriptor) -> Result<TaskAck, TaskStoreError> {
        if task.task_id.trim().is_empty() {
            return Err(TaskStoreError::InvalidTask("task_id is empty".into()));
        }
        let ack = TaskAck::accepted(task.task_id.clone());
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|t| t.task_id == task.task_id) {
            Some(existing) => *existing = task,
            None => tasks.push(task),
        }
        Ok(ack)
    }

    async fn get(&self, task_id: &str) -> Result<Option<TaskDescriptor>, TaskStoreError> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|t| t.task_id == task_id).cloned())
    }

    async fn list(&self) -> Result<Vec<TaskDescriptor>, TaskStoreError> {
        Ok(self.tasks.read().await.clone())
    }
}
