pub mod builders;
pub mod capture;
pub mod clock;
pub mod fake_executor;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::fmt;

use devtask::exec::Executor;
use devtask::logging::{build_filter, LOG_ENV};
use devtask::pipeline::PipelineRunner;
use devtask::report::Reporter;
use devtask::task::Registry;

use crate::capture::SharedBuffer;
use crate::clock::ManualClock;
use crate::fake_executor::FakeBackend;

static INIT: Once = Once::new();

/// Longest any single test may take before it is failed.
const TEST_DEADLINE: Duration = Duration::from_secs(5);

/// Route diagnostics into the test harness's captured output.
///
/// Uses the same `DEVTASK_LOG` filter as the binary, so
/// `DEVTASK_LOG=devtask::pipeline=debug cargo test` narrows test logs too.
pub fn init_tracing() {
    INIT.call_once(|| {
        let env = std::env::var(LOG_ENV).ok();
        // Another test binary may already have installed one.
        let _ = fmt()
            .with_env_filter(build_filter(None, env.as_deref()))
            .with_test_writer()
            .try_init();
    });
}

/// Fail the test instead of hanging if `f` does not finish in time.
pub async fn with_timeout<F: Future>(f: F) -> F::Output {
    match tokio::time::timeout(TEST_DEADLINE, f).await {
        Ok(output) => output,
        Err(_) => panic!("test did not finish within {TEST_DEADLINE:?}"),
    }
}

/// A runner wired to a fake backend, a manual clock, and an in-memory
/// status-line buffer.
pub struct TestRig {
    pub runner: PipelineRunner<FakeBackend, ManualClock>,
    pub backend: FakeBackend,
    pub clock: ManualClock,
    pub output: SharedBuffer,
}

impl TestRig {
    /// Build a rig; the backend is wired to the rig's clock so every fake
    /// command advances time by its scripted duration.
    pub fn new(registry: Registry, backend: FakeBackend) -> Self {
        let clock = ManualClock::new();
        let backend = backend.with_clock(clock.clone());
        let output = SharedBuffer::new();
        let reporter = Reporter::new(output.clone(), false);
        let executor = Executor::new(backend.clone(), clock.clone(), reporter);
        Self {
            runner: PipelineRunner::new(registry, executor),
            backend,
            clock,
            output,
        }
    }

    /// Rig over the built-in task table.
    pub fn builtin(backend: FakeBackend) -> Self {
        let registry = Registry::builtin().expect("built-in registry is valid");
        Self::new(registry, backend)
    }
}
