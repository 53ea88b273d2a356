//! Run entry points: submit a task, then run the supervisor graph on it.
//!
//! Re-exports [`run`], [`run_with_config`], [`run_with_options`] and [`Error`].

pub use crate::config::Error;

mod common;

pub(crate) use common::run_reference_graph;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use agentgraph::{
    AgentState, Checkpoint, Checkpointer, FixedDecider, MemorySaver, RunOutcome, TaskAck,
    TaskDescriptor, TaskStore,
};

use crate::config::{RunConfig, RunOptions};

/// What a run produced: the store's acknowledgement, the graph outcome and,
/// when the config carries a thread id, the checkpoint saved for it.
#[derive(Debug)]
pub struct RunReport {
    pub ack: TaskAck,
    pub outcome: RunOutcome<AgentState>,
    pub checkpoint: Option<Checkpoint<AgentState>>,
}

/// Run with default config (from .env) and no cancellation.
///
/// Loads `.env` internally, then calls `run_with_config`.
pub async fn run(store: &dyn TaskStore, task: TaskDescriptor) -> Result<RunReport, Error> {
    dotenv::dotenv().ok();
    let config = RunConfig::from_env()?;
    run_with_config(&config, store, task, AgentState::default(), CancellationToken::new()).await
}

/// Run with config from env plus `options` overrides.
///
/// Loads `.env`, builds `RunConfig` from env, applies `options`, then calls
/// [`run_with_config`].
pub async fn run_with_options(
    store: &dyn TaskStore,
    task: TaskDescriptor,
    seed: AgentState,
    options: &RunOptions,
    cancel: CancellationToken,
) -> Result<RunReport, Error> {
    dotenv::dotenv().ok();
    let mut config = RunConfig::from_env()?;
    config.apply_options(options);
    run_with_config(&config, store, task, seed, cancel).await
}

/// Submits `task` to `store`, then runs the reference graph seeded from it.
///
/// `seed` supplies everything except the task id (e.g. a pre-set iteration);
/// the task id always comes from the acknowledged descriptor. Fails only if
/// submission or compilation fails; run-time problems are in the outcome.
pub async fn run_with_config(
    config: &RunConfig,
    store: &dyn TaskStore,
    task: TaskDescriptor,
    seed: AgentState,
    cancel: CancellationToken,
) -> Result<RunReport, Error> {
    let budget = config.budget_for(&task);
    let state = AgentState {
        task_id: task.task_id.clone(),
        ..seed
    };
    let ack = store.submit(task).await?;
    tracing::info!(task_id = %ack.task_id, status = %ack.status, "task submitted");

    let saver = config
        .thread_id
        .as_ref()
        .map(|_| Arc::new(MemorySaver::<AgentState>::new()));
    let outcome = run_reference_graph(
        config,
        Arc::new(FixedDecider::default()),
        state,
        budget,
        cancel,
        saver
            .clone()
            .map(|s| s as Arc<dyn Checkpointer<AgentState>>),
    )
    .await?;

    let checkpoint = match (&saver, config.thread_id.as_deref()) {
        (Some(saver), Some(thread_id)) => match saver.get_latest(thread_id).await {
            Ok(cp) => cp,
            Err(error) => {
                tracing::warn!(%error, thread_id, "failed to read back checkpoint");
                None
            }
        },
        _ => None,
    };
    Ok(RunReport {
        ack,
        outcome,
        checkpoint,
    })
}
