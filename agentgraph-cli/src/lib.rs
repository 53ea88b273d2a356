//! agentgraph-cli library: reusable run logic for host processes.
//!
//! Reads limits from .env, submits a task, builds the supervisor graph
//! (supervisor → researcher → coder → reviewer → aggregator) and runs it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agentgraph::{InMemoryTaskStore, TaskDescriptor};
//!
//! # async fn demo() -> Result<(), agentgraph_cli::Error> {
//! let store = InMemoryTaskStore::new();
//! let report = agentgraph_cli::run(&store, TaskDescriptor::new("t1", "build a parser")).await?;
//! for m in &report.outcome.state.messages {
//!     println!("{}", m.content());
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod middleware;
mod run;
mod signal;

pub use agentgraph::{AgentState, Message, StopReason};
pub use config::{Error, RunConfig, RunOptions};
pub use middleware::{LoggingMiddleware, WithNodeLogging};
pub use run::{run, run_with_config, run_with_options, RunReport};
pub use signal::cancel_on_shutdown;
