// tests/registry_validation.rs

use devtask::errors::DevtaskError;
use devtask::task::{CommandSpec, Registry, Task};
use devtask::types::TaskName;

fn single(name: TaskName) -> Task {
    Task::single(name, name.label(), CommandSpec::new("true"))
}

#[test]
fn composite_may_not_include_long_running_task() {
    let tasks = vec![
        single(TaskName::Check),
        Task::long_running(TaskName::Dev, "dev", CommandSpec::new("sleep").arg("60")),
        Task::composite(TaskName::Rapid, "rapid", vec![TaskName::Check, TaskName::Dev]),
    ];

    match Registry::from_tasks(tasks) {
        Err(DevtaskError::ConfigError(msg)) => assert!(msg.contains("long-running")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn composites_referencing_each_other_are_a_cycle() {
    let tasks = vec![
        single(TaskName::Check),
        Task::composite(TaskName::Rapid, "rapid", vec![TaskName::Check, TaskName::Build]),
        Task::composite(TaskName::Build, "build", vec![TaskName::Rapid]),
    ];

    assert!(matches!(
        Registry::from_tasks(tasks),
        Err(DevtaskError::CompositeCycle(_))
    ));
}

#[test]
fn self_referencing_composite_is_a_cycle() {
    let tasks = vec![Task::composite(TaskName::Rapid, "rapid", vec![TaskName::Rapid])];

    assert!(matches!(
        Registry::from_tasks(tasks),
        Err(DevtaskError::CompositeCycle(msg)) if msg.contains("rapid")
    ));
}

#[test]
fn nested_composites_are_rejected() {
    let tasks = vec![
        single(TaskName::Check),
        Task::composite(TaskName::Build, "build", vec![TaskName::Check]),
        Task::composite(TaskName::Rapid, "rapid", vec![TaskName::Build]),
    ];

    match Registry::from_tasks(tasks) {
        Err(DevtaskError::ConfigError(msg)) => assert!(msg.contains("nest")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn duplicate_definitions_are_rejected() {
    let tasks = vec![single(TaskName::Check), single(TaskName::Check)];
    assert!(matches!(
        Registry::from_tasks(tasks),
        Err(DevtaskError::ConfigError(msg)) if msg.contains("more than once")
    ));
}

#[test]
fn empty_composite_is_rejected() {
    let tasks = vec![Task::composite(TaskName::Rapid, "rapid", vec![])];
    assert!(matches!(
        Registry::from_tasks(tasks),
        Err(DevtaskError::ConfigError(msg)) if msg.contains("no steps")
    ));
}
