//! Run config: graph limits, terminal marker, budget. Can be filled from env / .env.
//!
//! Interacts with [`RunOptions`](super::RunOptions), [`run_with_config`](crate::run_with_config)
//! and agentgraph's [`ReferenceGraphConfig`].

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use agentgraph::{FileTaskStore, ReferenceGraphConfig, TaskDescriptor};

/// Workspace used when `WORKSPACE_DIR` is unset.
pub const DEFAULT_WORKSPACE: &str = "workspace";

/// Error type used for config loading and runs.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Run config for the reference supervisor graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Step cap for the executor. Default: 10.
    pub max_steps: usize,
    /// Supervisor iteration at which it hands over to aggregation. Default: 10.
    pub iteration_cap: u32,
    /// Value of `next_agent` that ends a run. Default: `__end__`.
    pub terminal_marker: String,
    /// Budget override. `None` uses the task's own budget; `Some(0s)` means unbounded.
    pub timeout: Option<Duration>,
    /// When set, the final state is checkpointed under this id.
    pub thread_id: Option<String>,
    /// Root for task records (`<workspace>/.tasks/agentgraph`). Default: `workspace`.
    pub workspace: PathBuf,
    /// When true, show debug logs (node enter/exit, graph execution).
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        let graph = ReferenceGraphConfig::default();
        Self {
            max_steps: graph.max_steps,
            iteration_cap: graph.iteration_cap,
            terminal_marker: graph.terminal_marker,
            timeout: None,
            thread_id: None,
            workspace: PathBuf::from(DEFAULT_WORKSPACE),
            verbose: false,
        }
    }
}

/// Reads `name` and parses it; unset keeps `default`, unparsable is an error.
fn env_parse<T: FromStr>(name: &str, default: T) -> Result<T, Error> {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a valid value: {:?}", name, raw),
            )) as Error
        }),
        Err(_) => Ok(default),
    }
}

/// Treats empty or whitespace-only values as unset.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl RunConfig {
    /// Fill config from env vars (and .env). Requires `dotenv::dotenv().ok()` or load inside `run()`.
    ///
    /// `AGENTGRAPH_MAX_STEPS`, `AGENTGRAPH_ITERATION_CAP`, `AGENTGRAPH_TERMINAL_MARKER`,
    /// `AGENTGRAPH_TIMEOUT_SECS`, `AGENTGRAPH_THREAD_ID` and `WORKSPACE_DIR` are optional.
    pub fn from_env() -> Result<Self, Error> {
        let defaults = Self::default();
        let max_steps = env_parse("AGENTGRAPH_MAX_STEPS", defaults.max_steps)?;
        let iteration_cap = env_parse("AGENTGRAPH_ITERATION_CAP", defaults.iteration_cap)?;
        let terminal_marker = non_blank(std::env::var("AGENTGRAPH_TERMINAL_MARKER").ok())
            .unwrap_or(defaults.terminal_marker);
        let timeout = match std::env::var("AGENTGRAPH_TIMEOUT_SECS") {
            Ok(_) => Some(Duration::from_secs(env_parse("AGENTGRAPH_TIMEOUT_SECS", 0u64)?)),
            Err(_) => None,
        };
        let thread_id = non_blank(std::env::var("AGENTGRAPH_THREAD_ID").ok());
        let workspace = non_blank(std::env::var("WORKSPACE_DIR").ok())
            .map(PathBuf::from)
            .unwrap_or(defaults.workspace);
        Ok(Self {
            max_steps,
            iteration_cap,
            terminal_marker,
            timeout,
            thread_id,
            workspace,
            verbose: false,
        })
    }

    /// Apply optional overrides from `RunOptions` to this config.
    ///
    /// Only set fields in `options` override; `verbose` is always taken from options.
    pub fn apply_options(&mut self, options: &super::RunOptions) {
        if let Some(n) = options.max_steps {
            self.max_steps = n;
        }
        if let Some(cap) = options.iteration_cap {
            self.iteration_cap = cap;
        }
        if let Some(marker) = &options.terminal_marker {
            self.terminal_marker = marker.clone();
        }
        if let Some(secs) = options.timeout_secs {
            self.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(thread_id) = non_blank(options.thread_id.clone()) {
            self.thread_id = Some(thread_id);
        }
        if let Some(workspace) = &options.workspace {
            self.workspace = workspace.clone();
        }
        self.verbose = options.verbose;
    }

    /// Graph-level settings for [`build_reference_graph`](agentgraph::build_reference_graph).
    pub fn graph_config(&self) -> ReferenceGraphConfig {
        ReferenceGraphConfig {
            max_steps: self.max_steps,
            iteration_cap: self.iteration_cap,
            terminal_marker: self.terminal_marker.clone(),
        }
    }

    /// Durable task store rooted at [`workspace`](Self::workspace).
    pub fn task_store(&self) -> FileTaskStore {
        FileTaskStore::in_workspace(&self.workspace)
    }

    /// Effective wall-clock budget for `task`: the override when set, else the task's own.
    pub fn budget_for(&self, task: &TaskDescriptor) -> Option<Duration> {
        match self.timeout {
            Some(d) if d.is_zero() => None,
            Some(d) => Some(d),
            None => task.run_budget(),
        }
    }
}
