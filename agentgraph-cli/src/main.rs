//! Binary: submit one task, run the supervisor graph on it and print the transcript.

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

use agentgraph::{AgentState, HealthReport, Priority, TaskDescriptor, TaskStore};
use agentgraph_cli::{
    cancel_on_shutdown, run_with_config, Message, RunConfig, RunOptions, StopReason,
};

#[derive(Parser, Debug)]
#[command(name = "agentgraph")]
#[command(about = "Run a task through the supervisor → research → code → review → aggregate graph")]
struct Args {
    /// Task id; seeds the run's state.
    #[arg(long, default_value = "task-1")]
    task_id: String,

    /// Task description (also accepted as trailing positional words).
    #[arg(short, long, value_name = "TEXT")]
    description: Option<String>,

    /// low, medium or high.
    #[arg(long, default_value = "medium")]
    priority: Priority,

    /// Task budget in minutes; 0 disables it.
    #[arg(long, default_value_t = agentgraph::host::DEFAULT_TIMEOUT_MINUTES)]
    timeout_minutes: u64,

    /// Budget in seconds, overriding the task's own.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Starting supervisor iteration.
    #[arg(long, default_value_t = 0)]
    iteration: u32,

    #[arg(long)]
    max_steps: Option<usize>,

    #[arg(long)]
    iteration_cap: Option<u32>,

    #[arg(long)]
    terminal_marker: Option<String>,

    /// Checkpoint the final state under this thread id and report it.
    #[arg(long)]
    thread_id: Option<String>,

    /// Root for task records; overrides WORKSPACE_DIR.
    #[arg(long, value_name = "DIR")]
    workspace: Option<PathBuf>,

    /// Print the recorded tasks as JSON and exit.
    #[arg(long)]
    list_tasks: bool,

    /// Print a health report as JSON and exit.
    #[arg(long)]
    health: bool,

    /// Debug logs for node enter/exit and graph execution.
    #[arg(short, long)]
    verbose: bool,

    #[arg(trailing_var_arg = true)]
    rest: Vec<String>,
}

fn get_description(args: &Args) -> String {
    if let Some(ref d) = args.description {
        return d.clone();
    }
    args.rest.join(" ").trim().to_string()
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,agentgraph=debug,agentgraph_cli=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    if args.health {
        println!("{}", serde_json::to_string_pretty(&HealthReport::now())?);
        return Ok(());
    }

    init_tracing(args.verbose);

    let task = TaskDescriptor::new(args.task_id.clone(), get_description(&args))
        .with_priority(args.priority)
        .with_timeout_minutes(args.timeout_minutes);
    let options = RunOptions {
        max_steps: args.max_steps,
        iteration_cap: args.iteration_cap,
        terminal_marker: args.terminal_marker.clone(),
        timeout_secs: args.timeout_secs,
        thread_id: args.thread_id.clone(),
        workspace: args.workspace.clone(),
        verbose: args.verbose,
    };

    dotenv::dotenv().ok();
    let mut config = RunConfig::from_env()?;
    config.apply_options(&options);
    let store = config.task_store();

    if args.list_tasks {
        println!("{}", serde_json::to_string_pretty(&store.list().await?)?);
        return Ok(());
    }

    let cancel = CancellationToken::new();
    cancel_on_shutdown(cancel.clone())?;

    let seed = AgentState::default().with_iteration(args.iteration);
    let report = match run_with_config(&config, &store, task, seed, cancel).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Task: {} ({})", report.ack.task_id, report.ack.status);
    println!("---");
    for m in &report.outcome.state.messages {
        match m {
            Message::System(x) => println!("[System] {}", x),
            Message::User(x) => println!("[User] {}", x),
            Message::Assistant(x) => println!("{}", x),
        }
    }
    println!("---");
    println!(
        "Stopped: {} after {} step(s), iteration {}",
        report.outcome.reason, report.outcome.steps, report.outcome.state.iteration
    );
    if let Some(cp) = &report.checkpoint {
        println!("Checkpoint: {} ({})", cp.id, cp.metadata.reason);
    }

    if matches!(report.outcome.reason, StopReason::Failed(_)) {
        std::process::exit(1);
    }
    Ok(())
}
