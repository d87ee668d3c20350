// src/pipeline/runner.rs

use std::time::{Duration, Instant};

use anyhow::anyhow;
use tracing::{debug, info};

use crate::errors::{DevtaskError, Result};
use crate::exec::{Clock, ExecutorBackend, Executor, OutputMode};
use crate::pipeline::state::{PipelineState, StepEvent};
use crate::task::{Registry, TaskKind};
use crate::types::TaskName;

/// Overall result of running one selected task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub success: bool,
    /// Time since the `started_at` instant the run was given.
    pub elapsed: Duration,
    /// For a failed composite, the step that failed.
    pub failed_step: Option<TaskName>,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Resolves task names through the registry and runs them.
#[derive(Debug)]
pub struct PipelineRunner<B, C> {
    registry: Registry,
    executor: Executor<B, C>,
}

impl<B: ExecutorBackend, C: Clock> PipelineRunner<B, C> {
    pub fn new(registry: Registry, executor: Executor<B, C>) -> Self {
        Self { registry, executor }
    }

    /// Run `name`, measuring from now.
    pub async fn run(&mut self, name: TaskName) -> Result<RunOutcome> {
        let started_at = self.executor.clock().now();
        self.run_from(name, started_at).await
    }

    /// Run `name`, measuring total elapsed time from `started_at`.
    ///
    /// `Err` is only returned for registry problems; a failing command is an
    /// `Ok` outcome with `success == false`.
    pub async fn run_from(&mut self, name: TaskName, started_at: Instant) -> Result<RunOutcome> {
        let task = self.registry.get(name)?.clone();
        debug!(task = %name, kind = ?task.kind, "resolved task");

        match task.kind {
            TaskKind::Single(command) => {
                let result = self.executor.execute(&command, &task.description).await;
                Ok(RunOutcome {
                    success: result.success,
                    elapsed: self.elapsed_since(started_at),
                    failed_step: None,
                })
            }
            TaskKind::LongRunning(command) => {
                self.executor
                    .reporter()
                    .info("Starting development server with hot reload...");
                let result = self
                    .executor
                    .execute_with(&command, &task.description, OutputMode::Inherited)
                    .await;
                // Only reached when the watcher exits on its own; Ctrl-C takes
                // the whole process group down with it.
                self.executor
                    .reporter()
                    .warning(&format!("{} stopped", task.description));
                Ok(RunOutcome {
                    success: result.success,
                    elapsed: self.elapsed_since(started_at),
                    failed_step: None,
                })
            }
            TaskKind::Composite(steps) => self.run_composite(&steps, started_at).await,
        }
    }

    async fn run_composite(&mut self, steps: &[TaskName], started_at: Instant) -> Result<RunOutcome> {
        let len = steps.len();
        let mut state = PipelineState::start();

        self.executor
            .reporter()
            .info("🚀 Starting rapid iteration cycle");

        loop {
            state = match state {
                PipelineState::Pending(_) => advance(state, StepEvent::Dispatch, len)?,
                PipelineState::Running(i) => {
                    let step = steps[i];
                    let task = self.registry.get(step)?;
                    let command = task.command().ok_or_else(|| {
                        DevtaskError::ConfigError(format!(
                            "pipeline step '{step}' does not bind a command"
                        ))
                    })?;

                    debug!(step = %step, index = i, "dispatching pipeline step");
                    let result = self.executor.execute(command, &task.description).await;

                    let event = if result.success {
                        StepEvent::Succeeded
                    } else {
                        StepEvent::Failed
                    };
                    advance(state, event, len)?
                }
                PipelineState::Failed(i) => {
                    let step = steps[i];
                    self.executor
                        .reporter()
                        .error(&format!("❌ Rapid iteration failed at: {}", step.label()));
                    info!(step = %step, "pipeline stopped at failing step");
                    return Ok(RunOutcome {
                        success: false,
                        elapsed: self.elapsed_since(started_at),
                        failed_step: Some(step),
                    });
                }
                PipelineState::Completed => {
                    let elapsed = self.elapsed_since(started_at);
                    self.executor.reporter().success(&format!(
                        "🎉 Rapid iteration completed in {:.2}s",
                        elapsed.as_secs_f64()
                    ));
                    return Ok(RunOutcome {
                        success: true,
                        elapsed,
                        failed_step: None,
                    });
                }
            };
        }
    }

    fn elapsed_since(&self, started_at: Instant) -> Duration {
        self.executor
            .clock()
            .now()
            .saturating_duration_since(started_at)
    }
}

fn advance(state: PipelineState, event: StepEvent, len: usize) -> Result<PipelineState> {
    state.next(event, len).ok_or_else(|| {
        DevtaskError::Other(anyhow!(
            "invalid pipeline transition {event:?} from {state:?}"
        ))
    })
}
