// src/config/validate.rs

use std::collections::BTreeMap;

use crate::config::model::{ConfigFile, RawConfigFile, TaskConfig};
use crate::errors::{DevtaskError, Result};
use crate::types::TaskName;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::DevtaskError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let tasks = validate_tasks(raw.task)?;
        validate_global_config(&raw.config)?;
        Ok(ConfigFile::new_unchecked(raw.config, tasks))
    }
}

fn validate_global_config(cfg: &crate::config::ConfigSection) -> Result<()> {
    if let Some(dir) = &cfg.working_dir {
        if dir.as_os_str().is_empty() {
            return Err(DevtaskError::ConfigError(
                "[config].working_dir must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_tasks(raw: BTreeMap<String, TaskConfig>) -> Result<BTreeMap<TaskName, TaskConfig>> {
    let mut tasks = BTreeMap::new();

    for (key, task) in raw {
        let name: TaskName = key.parse().map_err(|_| {
            DevtaskError::ConfigError(format!(
                "unknown task '{key}' in [task.{key}] (expected one of check, test, build, dev, format, lint)"
            ))
        })?;

        if name == TaskName::Rapid {
            return Err(DevtaskError::ConfigError(
                "task 'rapid' is a fixed composite and cannot bind a command".to_string(),
            ));
        }

        if task.program.trim().is_empty() {
            return Err(DevtaskError::ConfigError(format!(
                "task '{name}' has an empty `program`"
            )));
        }

        if tasks.insert(name, task).is_some() {
            return Err(DevtaskError::ConfigError(format!(
                "task '{name}' is configured more than once"
            )));
        }
    }

    Ok(tasks)
}
