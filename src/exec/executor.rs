// src/exec/executor.rs

use std::time::Duration;

use tracing::debug;

use crate::exec::backend::{ExecutorBackend, OutputMode};
use crate::exec::clock::Clock;
use crate::report::Reporter;
use crate::task::CommandSpec;

/// Outcome of running one external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub success: bool,
    pub elapsed: Duration,
    /// Diagnostic text; only set on failure.
    pub error_output: Option<String>,
    pub exit_code: Option<i32>,
}

/// Runs single commands through a backend, timing each one and writing
/// `Starting` / `completed` / `failed` status lines.
///
/// A failed command is never an `Err`: it comes back as a result with
/// `success == false` and the caller decides what to do.
#[derive(Debug)]
pub struct Executor<B, C> {
    backend: B,
    clock: C,
    reporter: Reporter,
}

impl<B: ExecutorBackend, C: Clock> Executor<B, C> {
    pub fn new(backend: B, clock: C, reporter: Reporter) -> Self {
        Self {
            backend,
            clock,
            reporter,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn reporter(&mut self) -> &mut Reporter {
        &mut self.reporter
    }

    /// Run `command` with captured output.
    pub async fn execute(&mut self, command: &CommandSpec, description: &str) -> ExecutionResult {
        self.execute_with(command, description, OutputMode::Captured).await
    }

    pub async fn execute_with(
        &mut self,
        command: &CommandSpec,
        description: &str,
        mode: OutputMode,
    ) -> ExecutionResult {
        if !description.is_empty() {
            self.reporter.info(&format!("Starting: {description}"));
        }

        let start = self.clock.now();
        let outcome = self.backend.run_command(command, mode).await;
        let elapsed = self.clock.now().saturating_duration_since(start);
        let secs = elapsed.as_secs_f64();

        debug!(
            cmd = %command,
            elapsed_ms = elapsed.as_millis() as u64,
            status = ?outcome.status,
            "command finished"
        );

        if outcome.success() {
            self.reporter
                .success(&format!("✅ {description} completed in {secs:.2}s"));
            ExecutionResult {
                success: true,
                elapsed,
                error_output: None,
                exit_code: outcome.exit_code(),
            }
        } else {
            let diagnostic = outcome.diagnostic();
            self.reporter
                .error(&format!("❌ {description} failed in {secs:.2}s"));
            self.reporter.error(&format!("Error: {diagnostic}"));
            ExecutionResult {
                success: false,
                elapsed,
                error_output: Some(diagnostic),
                exit_code: outcome.exit_code(),
            }
        }
    }
}
