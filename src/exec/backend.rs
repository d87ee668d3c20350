// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The executor talks to an `ExecutorBackend` instead of spawning processes
//! itself. Production uses [`RealExecutorBackend`]; tests provide a fake that
//! records invocations and returns scripted outcomes.

use std::future::Future;
use std::pin::Pin;

use crate::task::CommandSpec;

use super::process::run_process;

/// How a command's stdout/stderr are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Piped and collected into the [`CommandOutcome`].
    Captured,
    /// Passed through to the terminal; nothing is collected.
    Inherited,
}

/// How the process ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessStatus {
    /// Exited with this status code.
    Exited(i32),
    /// Killed by a signal before it could exit.
    Signalled,
    /// Could not be started (or waited on) at all.
    LaunchFailed(String),
}

/// Raw outcome of one external command, before timing and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub status: ProcessStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    pub fn exited(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            status: ProcessStatus::Exited(code),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn launch_failed(reason: impl Into<String>) -> Self {
        Self {
            status: ProcessStatus::LaunchFailed(reason.into()),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    pub fn success(&self) -> bool {
        matches!(self.status, ProcessStatus::Exited(0))
    }

    pub fn exit_code(&self) -> Option<i32> {
        match self.status {
            ProcessStatus::Exited(code) => Some(code),
            _ => None,
        }
    }

    /// Best available explanation of a failure: stderr, then stdout, then a
    /// description of the status itself.
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim_end();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim_end();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match &self.status {
            ProcessStatus::Exited(code) => format!("exited with status {code}"),
            ProcessStatus::Signalled => "terminated by signal".to_string(),
            ProcessStatus::LaunchFailed(reason) => reason.clone(),
        }
    }
}

/// Trait abstracting how a single command is run.
pub trait ExecutorBackend: Send {
    /// Run `command` to completion and report how it ended.
    ///
    /// Implementations never fail: a command that cannot be started is
    /// reported as [`ProcessStatus::LaunchFailed`].
    fn run_command<'a>(
        &'a mut self,
        command: &'a CommandSpec,
        mode: OutputMode,
    ) -> Pin<Box<dyn Future<Output = CommandOutcome> + Send + 'a>>;
}

/// Real executor backend used in production: spawns OS processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealExecutorBackend;

impl RealExecutorBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutorBackend for RealExecutorBackend {
    fn run_command<'a>(
        &'a mut self,
        command: &'a CommandSpec,
        mode: OutputMode,
    ) -> Pin<Box<dyn Future<Output = CommandOutcome> + Send + 'a>> {
        Box::pin(run_process(command, mode))
    }
}
