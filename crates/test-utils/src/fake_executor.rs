use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use devtask::exec::{CommandOutcome, ExecutorBackend, OutputMode};
use devtask::task::CommandSpec;

use crate::clock::ManualClock;

/// One call the fake backend received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: CommandSpec,
    pub mode: OutputMode,
}

#[derive(Debug, Default)]
struct Script {
    outcomes: HashMap<String, CommandOutcome>,
    durations: HashMap<String, Duration>,
    invocations: Vec<Invocation>,
}

/// A fake backend that:
/// - records every command it is asked to run, in order
/// - returns the scripted outcome for that command (success by default)
/// - advances a [`ManualClock`] by the command's scripted duration.
///
/// Commands are matched by their display form. Clones share state, so a test
/// can keep one handle and give another to the executor.
#[derive(Debug, Clone)]
pub struct FakeBackend {
    script: Arc<Mutex<Script>>,
    clock: Option<ManualClock>,
    default_duration: Duration,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script::default())),
            clock: None,
            default_duration: Duration::from_millis(100),
        }
    }

    /// Make `command` exit with `code` and the given stderr.
    pub fn fail(self, command: &CommandSpec, code: i32, stderr: &str) -> Self {
        self.respond(command, CommandOutcome::exited(code, "", stderr))
    }

    /// Make `command` look like it could not be started.
    pub fn launch_failure(self, command: &CommandSpec, reason: &str) -> Self {
        self.respond(command, CommandOutcome::launch_failed(reason))
    }

    pub fn respond(self, command: &CommandSpec, outcome: CommandOutcome) -> Self {
        self.script
            .lock()
            .unwrap()
            .outcomes
            .insert(command.to_string(), outcome);
        self
    }

    /// How long `command` appears to take on the manual clock.
    pub fn duration(self, command: &CommandSpec, duration: Duration) -> Self {
        self.script
            .lock()
            .unwrap()
            .durations
            .insert(command.to_string(), duration);
        self
    }

    pub fn with_clock(mut self, clock: ManualClock) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.script.lock().unwrap().invocations.clone()
    }

    /// Display forms of every command run so far, in order.
    pub fn invoked(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .map(|i| i.command.to_string())
            .collect()
    }

    pub fn invocation_count(&self, command: &CommandSpec) -> usize {
        let key = command.to_string();
        self.invocations()
            .iter()
            .filter(|i| i.command.to_string() == key)
            .count()
    }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutorBackend for FakeBackend {
    fn run_command<'a>(
        &'a mut self,
        command: &'a CommandSpec,
        mode: OutputMode,
    ) -> Pin<Box<dyn Future<Output = CommandOutcome> + Send + 'a>> {
        let script = Arc::clone(&self.script);
        let clock = self.clock.clone();
        let default_duration = self.default_duration;

        Box::pin(async move {
            let key = command.to_string();
            let (outcome, duration) = {
                let mut guard = script.lock().unwrap();
                guard.invocations.push(Invocation {
                    command: command.clone(),
                    mode,
                });
                let outcome = guard
                    .outcomes
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| CommandOutcome::exited(0, "", ""));
                let duration = guard.durations.get(&key).copied().unwrap_or(default_duration);
                (outcome, duration)
            };

            if let Some(clock) = clock {
                clock.advance(duration);
            }
            outcome
        })
    }
}
