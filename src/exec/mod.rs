// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `ExecutorBackend` trait and the production
//!   `RealExecutorBackend`; tests swap in a scripted fake.
//! - [`process`] actually spawns commands with `tokio::process::Command`.
//! - [`clock`] is the injectable time source used for step timing.
//! - [`executor`] wraps a backend with timing, classification and status
//!   lines, producing an [`ExecutionResult`] per command.

pub mod backend;
pub mod clock;
pub mod executor;
pub mod process;

pub use backend::{CommandOutcome, ExecutorBackend, OutputMode, ProcessStatus, RealExecutorBackend};
pub use clock::{Clock, SystemClock};
pub use executor::{ExecutionResult, Executor};
