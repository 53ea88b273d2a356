//! Host-side collaborators: task submission and health reporting.
//!
//! The engine only consumes a task's id (as the seed of the initial state) and
//! its budget; everything else here is for the host process.

mod file_store;
mod health;
mod task;

pub use file_store::FileTaskStore;
pub use health::{HealthReport, HealthStatus, FRAMEWORK_NAME};
pub use task::{
    InMemoryTaskStore, Priority, TaskAck, TaskDescriptor, TaskStore, TaskStoreError,
    DEFAULT_TIMEOUT_MINUTES,
};
