#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use devtask::config::{ConfigFile, ConfigSection, RawConfigFile, TaskConfig};
use devtask::errors::Result;
use devtask::task::{CommandSpec, Registry};
use devtask::types::TaskName;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                task: BTreeMap::new(),
            },
        }
    }

    pub fn with_task(mut self, name: &str, task: TaskConfig) -> Self {
        self.config.task.insert(name.to_string(), task);
        self
    }

    pub fn with_working_dir(mut self, dir: &str) -> Self {
        self.config.config.working_dir = Some(PathBuf::from(dir));
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn try_build(self) -> Result<ConfigFile> {
        ConfigFile::try_from(self.config)
    }

    pub fn build(self) -> ConfigFile {
        self.try_build()
            .expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskConfig`.
pub struct TaskConfigBuilder {
    task: TaskConfig,
}

impl TaskConfigBuilder {
    pub fn new(program: &str) -> Self {
        Self {
            task: TaskConfig {
                program: program.to_string(),
                args: vec![],
                description: None,
                env: BTreeMap::new(),
            },
        }
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.task.args.push(arg.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.task.description = Some(description.to_string());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.task.env.insert(key.to_string(), value.to_string());
        self
    }

    pub fn build(self) -> TaskConfig {
        self.task
    }
}

/// The command the built-in registry binds to `name`.
pub fn builtin_command(name: TaskName) -> CommandSpec {
    Registry::builtin()
        .expect("built-in registry is valid")
        .get(name)
        .expect("built-in task exists")
        .command()
        .expect("task binds a command")
        .clone()
}
