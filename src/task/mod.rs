// src/task/mod.rs

//! Task definitions and the registry that maps task names to them.
//!
//! - [`command`] holds the structured `CommandSpec` (program + args, no shell).
//! - [`registry`] builds and validates the read-only name → `Task` table.

pub mod command;
pub mod registry;

pub use command::CommandSpec;
pub use registry::Registry;

use crate::types::TaskName;

/// What running a task actually means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// One external command whose output is captured.
    Single(CommandSpec),
    /// Ordered fail-fast sequence of other tasks.
    Composite(Vec<TaskName>),
    /// A watch-style command expected to run until interrupted. Its output
    /// goes straight to the terminal.
    LongRunning(CommandSpec),
}

/// One orchestrable unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: TaskName,
    pub description: String,
    pub kind: TaskKind,
}

impl Task {
    pub fn single(name: TaskName, description: &str, command: CommandSpec) -> Self {
        Self {
            name,
            description: description.to_string(),
            kind: TaskKind::Single(command),
        }
    }

    pub fn long_running(name: TaskName, description: &str, command: CommandSpec) -> Self {
        Self {
            name,
            description: description.to_string(),
            kind: TaskKind::LongRunning(command),
        }
    }

    pub fn composite(name: TaskName, description: &str, steps: Vec<TaskName>) -> Self {
        Self {
            name,
            description: description.to_string(),
            kind: TaskKind::Composite(steps),
        }
    }

    /// The bound command, if this task runs one directly.
    pub fn command(&self) -> Option<&CommandSpec> {
        match &self.kind {
            TaskKind::Single(cmd) | TaskKind::LongRunning(cmd) => Some(cmd),
            TaskKind::Composite(_) => None,
        }
    }

    pub fn command_mut(&mut self) -> Option<&mut CommandSpec> {
        match &mut self.kind {
            TaskKind::Single(cmd) | TaskKind::LongRunning(cmd) => Some(cmd),
            TaskKind::Composite(_) => None,
        }
    }
}

/// The built-in task table.
pub fn builtin_tasks() -> Vec<Task> {
    vec![
        Task::single(
            TaskName::Check,
            "Fast workspace check",
            CommandSpec::new("cargo").args(["check", "--workspace"]),
        ),
        Task::single(
            TaskName::Test,
            "Test suite",
            CommandSpec::new("cargo").args(["test", "--workspace"]),
        ),
        Task::single(
            TaskName::Build,
            "Build all crates",
            CommandSpec::new("cargo").args(["build", "--workspace"]),
        ),
        Task::long_running(
            TaskName::Dev,
            "Development server",
            CommandSpec::new("cargo").args(["watch", "-x", "run --bin orbiton -- dev"]),
        ),
        Task::single(
            TaskName::Format,
            "Code formatting",
            CommandSpec::new("cargo").args(["fmt", "--all"]),
        ),
        Task::single(
            TaskName::Lint,
            "Code linting",
            CommandSpec::new("cargo").args([
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ]),
        ),
        Task::composite(
            TaskName::Rapid,
            "Rapid iteration cycle",
            rapid_sequence(),
        ),
    ]
}

/// Steps of the rapid iteration cycle, in execution order.
pub fn rapid_sequence() -> Vec<TaskName> {
    vec![
        TaskName::Format,
        TaskName::Check,
        TaskName::Lint,
        TaskName::Test,
        TaskName::Build,
    ]
}
