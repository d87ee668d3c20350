// src/exec/process.rs

//! Spawning a single external command.

use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{debug, info, trace};

use crate::exec::backend::{CommandOutcome, OutputMode, ProcessStatus};
use crate::task::CommandSpec;

/// Run `spec` to completion.
///
/// Any error spawning or waiting on the child is folded into
/// [`ProcessStatus::LaunchFailed`] so callers only ever see an outcome.
pub async fn run_process(spec: &CommandSpec, mode: OutputMode) -> CommandOutcome {
    match run_process_inner(spec, mode).await {
        Ok(outcome) => outcome,
        Err(err) => {
            debug!(program = %spec.program, error = %err, "command could not be run");
            CommandOutcome::launch_failed(format!("{err:#}"))
        }
    }
}

async fn run_process_inner(spec: &CommandSpec, mode: OutputMode) -> Result<CommandOutcome> {
    info!(cmd = %spec, ?mode, "starting command");

    let mut cmd = build_command(spec);

    let outcome = match mode {
        OutputMode::Captured => {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());

            let output = cmd
                .output()
                .await
                .with_context(|| format!("failed to run `{}`", spec.program))?;

            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            for line in stderr.lines() {
                trace!(program = %spec.program, "stderr: {}", line);
            }

            CommandOutcome {
                status: status_of(output.status),
                stdout,
                stderr,
            }
        }
        OutputMode::Inherited => {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());

            let mut child = cmd
                .spawn()
                .with_context(|| format!("failed to start `{}`", spec.program))?;
            let status = child
                .wait()
                .await
                .with_context(|| format!("waiting for `{}`", spec.program))?;

            CommandOutcome {
                status: status_of(status),
                stdout: String::new(),
                stderr: String::new(),
            }
        }
    };

    info!(
        cmd = %spec,
        exit_code = ?outcome.exit_code(),
        success = outcome.success(),
        "command exited"
    );

    Ok(outcome)
}

fn build_command(spec: &CommandSpec) -> Command {
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args).kill_on_drop(true);

    if let Some(dir) = &spec.working_dir {
        cmd.current_dir(dir);
    }
    for (key, value) in &spec.env {
        cmd.env(key, value);
    }

    cmd
}

fn status_of(status: std::process::ExitStatus) -> ProcessStatus {
    match status.code() {
        Some(code) => ProcessStatus::Exited(code),
        None => ProcessStatus::Signalled,
    }
}
