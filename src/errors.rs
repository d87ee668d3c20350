// src/errors.rs

//! Error type for resolving and running tasks.
//!
//! A failing external command is never one of these: it is reported through
//! `ExecutionResult`. These errors mean devtask could not work out what to
//! run at all.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevtaskError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("cannot read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Cycle detected between composite tasks: {0}")]
    CompositeCycle(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DevtaskError>;
