// src/config/mod.rs

//! Configuration loading and validation for devtask.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk, or fall back to built-in tasks (`loader.rs`).
//! - Validate task names and command overrides (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, resolve_config};
pub use model::{ConfigFile, ConfigSection, RawConfigFile, TaskConfig};
