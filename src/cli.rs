// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::TaskName;

/// Command-line arguments for `devtask`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "devtask",
    version,
    about = "Development task runner: check, test, build, lint, format, and a fail-fast rapid cycle.",
    long_about = None
)]
pub struct CliArgs {
    /// Task to run.
    #[arg(value_enum, value_name = "TASK")]
    pub task: TaskName,

    /// Path to a config file (TOML) overriding task commands.
    ///
    /// Default: `Devtask.toml` in the current directory, if it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level for diagnostics (error, warn, info, debug, trace).
    ///
    /// If omitted, `DEVTASK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve the task and print what would run, without executing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Print status lines without color. `NO_COLOR` has the same effect.
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Whether status lines should be colored.
    pub fn color_enabled(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The level as a `tracing` filter directive.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
