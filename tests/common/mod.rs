#![allow(unused_imports)]

pub use devtask_test_utils::builders;
pub use devtask_test_utils::capture::SharedBuffer;
pub use devtask_test_utils::clock::ManualClock;
pub use devtask_test_utils::fake_executor::FakeBackend;
pub use devtask_test_utils::{init_tracing, with_timeout, TestRig};
