// src/task/registry.rs

use std::collections::BTreeMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::config::ConfigFile;
use crate::errors::{DevtaskError, Result};
use crate::task::{builtin_tasks, Task, TaskKind};
use crate::types::TaskName;

/// Read-only mapping from task name to task definition.
///
/// Built once at startup. Construction fails if a composite refers to a task
/// that does not exist, to anything other than a single-command task, or if
/// composites form a cycle.
#[derive(Debug, Clone)]
pub struct Registry {
    tasks: BTreeMap<TaskName, Task>,
}

impl Registry {
    /// Validate and index the given task definitions.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for task in tasks {
            let name = task.name;
            if map.insert(name, task).is_some() {
                return Err(DevtaskError::ConfigError(format!(
                    "task '{name}' is defined more than once"
                )));
            }
        }

        validate_composites(&map)?;
        validate_acyclic(&map)?;

        Ok(Self { tasks: map })
    }

    /// Registry holding only the built-in task table.
    pub fn builtin() -> Result<Self> {
        Self::from_tasks(builtin_tasks())
    }

    /// Built-in tasks with the overrides from a validated config applied.
    pub fn from_config(cfg: &ConfigFile) -> Result<Self> {
        let mut tasks = builtin_tasks();

        for task in tasks.iter_mut() {
            let name = task.name;
            if let Some(override_cfg) = cfg.task(name) {
                if let Some(description) = &override_cfg.description {
                    task.description = description.clone();
                }
                let Some(cmd) = task.command_mut() else {
                    // Rejected earlier by config validation.
                    continue;
                };
                cmd.program = override_cfg.program.clone();
                cmd.args = override_cfg.args.clone();
                cmd.env = override_cfg.env.clone();
                debug!(task = %name, cmd = %cmd, "applied command override from config");
            }

            if let (Some(dir), Some(cmd)) = (&cfg.config.working_dir, task.command_mut()) {
                if cmd.working_dir.is_none() {
                    cmd.working_dir = Some(dir.clone());
                }
            }
        }

        Self::from_tasks(tasks)
    }

    /// Look up a task. An unknown name here is a configuration error.
    pub fn get(&self, name: TaskName) -> Result<&Task> {
        self.tasks
            .get(&name)
            .ok_or_else(|| DevtaskError::TaskNotFound(name.to_string()))
    }

    pub fn contains(&self, name: TaskName) -> bool {
        self.tasks.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn validate_composites(tasks: &BTreeMap<TaskName, Task>) -> Result<()> {
    for task in tasks.values() {
        let TaskKind::Composite(steps) = &task.kind else {
            continue;
        };

        if steps.is_empty() {
            return Err(DevtaskError::ConfigError(format!(
                "composite task '{}' has no steps",
                task.name
            )));
        }

        for step in steps {
            if *step == task.name {
                return Err(DevtaskError::CompositeCycle(format!(
                    "composite task '{}' lists itself as a step",
                    task.name
                )));
            }
            match tasks.get(step).map(|t| &t.kind) {
                None => {
                    return Err(DevtaskError::ConfigError(format!(
                        "composite task '{}' has unknown step '{}'",
                        task.name, step
                    )));
                }
                Some(TaskKind::Single(_)) => {}
                Some(TaskKind::LongRunning(_)) => {
                    return Err(DevtaskError::ConfigError(format!(
                        "composite task '{}' cannot include long-running task '{}'",
                        task.name, step
                    )));
                }
                Some(TaskKind::Composite(_)) => {
                    // Reported as a cycle below if it is one.
                    continue;
                }
            }
        }
    }
    Ok(())
}

fn validate_acyclic(tasks: &BTreeMap<TaskName, Task>) -> Result<()> {
    // Edge direction: step -> composite.
    let mut graph: DiGraphMap<TaskName, ()> = DiGraphMap::new();

    for name in tasks.keys() {
        graph.add_node(*name);
    }
    for task in tasks.values() {
        if let TaskKind::Composite(steps) = &task.kind {
            for step in steps {
                graph.add_edge(*step, task.name, ());
            }
        }
    }

    if let Err(cycle) = toposort(&graph, None) {
        return Err(DevtaskError::CompositeCycle(format!(
            "cycle detected between composite tasks involving '{}'",
            cycle.node_id()
        )));
    }

    // Acyclic, but composites must still be flat.
    for task in tasks.values() {
        if let TaskKind::Composite(steps) = &task.kind {
            if let Some(nested) = steps
                .iter()
                .find(|s| matches!(tasks.get(*s).map(|t| &t.kind), Some(TaskKind::Composite(_))))
            {
                return Err(DevtaskError::ConfigError(format!(
                    "composite task '{}' cannot nest composite task '{}'",
                    task.name, nested
                )));
            }
        }
    }

    Ok(())
}
