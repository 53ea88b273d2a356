//! Configuration types for running the supervisor graph.
//!
//! Re-exports [`RunConfig`], [`RunOptions`] and config [`Error`].

mod run_config;
mod run_options;

pub use run_config::{Error, RunConfig};
pub use run_options::RunOptions;
