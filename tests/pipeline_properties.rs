// tests/pipeline_properties.rs

mod common;
use crate::common::builders::builtin_command;
use crate::common::{FakeBackend, TestRig};

use proptest::prelude::*;

use devtask::task::rapid_sequence;
use devtask::types::TaskName;

fn block_on<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(f)
}

proptest! {
    /// Whatever the step outcomes, exactly the prefix up to and including the
    /// first failure runs, and the outcome names that step.
    #[test]
    fn rapid_runs_exactly_the_prefix_up_to_first_failure(
        failures in proptest::collection::vec(any::<bool>(), 5),
        durations_ms in proptest::collection::vec(0u64..5_000, 5),
    ) {
        let steps = rapid_sequence();
        let mut backend = FakeBackend::new();
        for ((step, fails), ms) in steps.iter().zip(&failures).zip(&durations_ms) {
            let cmd = builtin_command(*step);
            backend = backend.duration(&cmd, std::time::Duration::from_millis(*ms));
            if *fails {
                backend = backend.fail(&cmd, 1, "failed");
            }
        }
        let mut rig = TestRig::builtin(backend);

        let outcome = block_on(rig.runner.run(TaskName::Rapid)).unwrap();

        let first_failure = failures.iter().position(|f| *f);
        let ran = first_failure.map_or(steps.len(), |k| k + 1);
        let expected: Vec<String> = steps[..ran]
            .iter()
            .map(|s| builtin_command(*s).to_string())
            .collect();

        prop_assert_eq!(rig.backend.invoked(), expected);
        prop_assert_eq!(outcome.is_success(), first_failure.is_none());
        prop_assert_eq!(outcome.failed_step, first_failure.map(|k| steps[k]));

        let slowest = durations_ms[..ran].iter().copied().max().unwrap_or(0);
        prop_assert!(outcome.elapsed.as_millis() as u64 >= slowest);
    }
}
