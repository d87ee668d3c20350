// src/config/model.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::TaskName;

/// Configuration exactly as deserialized from TOML.
///
/// ```toml
/// [config]
/// working_dir = "."
///
/// [task.lint]
/// program = "cargo"
/// args = ["clippy", "--workspace", "--", "-D", "warnings"]
/// description = "Strict lint"
/// ```
///
/// All sections are optional. Convert into [`ConfigFile`] with `TryFrom` to
/// get the validated form.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    /// Command overrides from `[task.<name>]`, keyed by task name as written.
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigSection {
    /// Working directory for every command that does not set its own.
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

/// `[task.<name>]` section: replaces the built-in command of that task.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    /// Program to execute (looked up on `PATH`, never run through a shell).
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,

    /// Replaces the built-in description used in status lines.
    #[serde(default)]
    pub description: Option<String>,

    /// Extra environment variables for the command.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// Validated configuration with task keys resolved to [`TaskName`]s.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub config: ConfigSection,
    tasks: BTreeMap<TaskName, TaskConfig>,
}

impl ConfigFile {
    /// Only for use by validation; does not check anything.
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        tasks: BTreeMap<TaskName, TaskConfig>,
    ) -> Self {
        Self { config, tasks }
    }

    /// Override for the given task, if the config has one.
    pub fn task(&self, name: TaskName) -> Option<&TaskConfig> {
        self.tasks.get(&name)
    }

    /// Resolve a relative `working_dir` against `base`. Absolute paths and
    /// an empty `base` leave it untouched.
    pub(crate) fn anchor_working_dir(&mut self, base: &Path) {
        if base.as_os_str().is_empty() {
            return;
        }
        if let Some(dir) = self.config.working_dir.as_mut() {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
    }

    pub fn overridden_tasks(&self) -> impl Iterator<Item = TaskName> + '_ {
        self.tasks.keys().copied()
    }
}
