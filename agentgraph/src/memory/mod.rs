//! # Memory: checkpointing run results
//!
//! The engine itself never persists anything. A [`Checkpointer`] is an external
//! collaborator a graph can be compiled with; after a run stops, the executor
//! hands it the final state keyed by the run's `thread_id`.
//!
//! | Type            | Persistence | Use case   |
//! |-----------------|-------------|------------|
//! | [`MemorySaver`] | In-memory   | Dev, tests |
//!
//! Use with [`StateGraph::compile_with_checkpointer`](crate::graph::StateGraph::compile_with_checkpointer)
//! and [`InvokeOptions::with_thread_id`](crate::graph::InvokeOptions::with_thread_id).

mod checkpoint;
mod checkpointer;
mod memory_saver;

pub use checkpoint::{Checkpoint, CheckpointListItem, CheckpointMetadata};
pub use checkpointer::{CheckpointError, Checkpointer};
pub use memory_saver::MemorySaver;
