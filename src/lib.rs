// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod task;
pub mod types;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::resolve_config;
use crate::exec::{Executor, RealExecutorBackend, SystemClock};
use crate::pipeline::PipelineRunner;
use crate::report::Reporter;
use crate::task::{Registry, TaskKind};
use crate::types::TaskName;

/// High-level entry point used by `main.rs`.
///
/// Loads config, builds the registry, and runs the selected task with the
/// real process backend. Returns whether the task succeeded; `Err` means the
/// task could not be resolved at all.
pub async fn run(args: CliArgs) -> Result<bool> {
    let cfg = resolve_config(args.config.as_deref())?;
    let registry = Registry::from_config(&cfg)?;
    debug!(tasks = registry.len(), "registry built");

    if args.dry_run {
        print_dry_run(&registry, args.task)?;
        return Ok(true);
    }

    let reporter = Reporter::stdout(args.color_enabled());
    let executor = Executor::new(RealExecutorBackend::new(), SystemClock, reporter);
    let mut runner = PipelineRunner::new(registry, executor);

    let outcome = runner.run(args.task).await?;
    info!(
        task = %args.task,
        success = outcome.success,
        elapsed_ms = outcome.elapsed.as_millis() as u64,
        "task finished"
    );

    Ok(outcome.is_success())
}

/// Dry-run output: the selected task and the commands it would run.
fn print_dry_run(registry: &Registry, selected: TaskName) -> Result<()> {
    let task = registry.get(selected)?;

    println!("devtask dry-run");
    println!("  task: {} ({})", task.name, task.description);

    match &task.kind {
        TaskKind::Single(cmd) => println!("  cmd: {cmd}"),
        TaskKind::LongRunning(cmd) => println!("  cmd (long-running): {cmd}"),
        TaskKind::Composite(steps) => {
            println!("  steps ({}, fail-fast):", steps.len());
            for (i, step) in steps.iter().enumerate() {
                let step_task = registry.get(*step)?;
                match step_task.command() {
                    Some(cmd) => println!("    {}. {}: {cmd}", i + 1, step.label()),
                    None => println!("    {}. {}", i + 1, step.label()),
                }
            }
        }
    }

    if let Some(dir) = task.command().and_then(|c| c.working_dir.as_ref()) {
        println!("  working_dir: {}", dir.display());
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}
