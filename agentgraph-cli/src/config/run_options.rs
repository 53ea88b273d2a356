//! Optional overrides for a run (CLI args or programmatic).
//!
//! Used by [`RunConfig::apply_options`](super::RunConfig::apply_options) and
//! [`run_with_options`](crate::run_with_options).

use std::path::PathBuf;

/// Optional overrides: graph limits, budget, checkpoint thread, verbosity.
///
/// All fields are optional; only set fields override the base config (from env).
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Override the graph's step cap.
    pub max_steps: Option<usize>,
    /// Override the supervisor's iteration cap.
    pub iteration_cap: Option<u32>,
    /// Override the terminal marker.
    pub terminal_marker: Option<String>,
    /// Wall-clock budget in seconds; replaces the task's own `timeout_minutes`. 0 disables it.
    pub timeout_secs: Option<u64>,
    /// Save the final state under this thread id.
    pub thread_id: Option<String>,
    /// Root directory for task records.
    pub workspace: Option<PathBuf>,
    pub verbose: bool,
}
