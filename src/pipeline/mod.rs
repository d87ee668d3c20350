// src/pipeline/mod.rs

//! Task resolution and the fail-fast composite pipeline.
//!
//! The pure step state machine lives in [`state`]; [`runner`] drives it with
//! real (or fake) command executions.

pub mod runner;
pub mod state;

pub use runner::{PipelineRunner, RunOutcome};
pub use state::{PipelineState, StepEvent};
