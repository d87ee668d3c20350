// src/pipeline/state.rs

//! Composite pipeline state machine.
//!
//! ```text
//! Pending(i) --Dispatch--> Running(i)
//! Running(i) --Succeeded--> Pending(i+1)   if i+1 < len
//! Running(i) --Succeeded--> Completed      if i+1 == len
//! Running(i) --Failed-----> Failed(i)
//! ```
//!
//! `Failed` and `Completed` are terminal.

/// Where a composite run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Step `i` is next to be dispatched.
    Pending(usize),
    /// Step `i` is executing.
    Running(usize),
    /// Step `i` failed; later steps were skipped.
    Failed(usize),
    /// Every step succeeded.
    Completed,
}

/// Input to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    Dispatch,
    Succeeded,
    Failed,
}

impl PipelineState {
    pub fn start() -> Self {
        PipelineState::Pending(0)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Failed(_) | PipelineState::Completed)
    }

    /// Apply `event` for a pipeline of `len` steps.
    ///
    /// Returns `None` if the event is not valid in the current state.
    pub fn next(self, event: StepEvent, len: usize) -> Option<PipelineState> {
        match (self, event) {
            (PipelineState::Pending(i), StepEvent::Dispatch) if i < len => {
                Some(PipelineState::Running(i))
            }
            (PipelineState::Running(i), StepEvent::Succeeded) if i + 1 < len => {
                Some(PipelineState::Pending(i + 1))
            }
            (PipelineState::Running(i), StepEvent::Succeeded) if i + 1 == len => {
                Some(PipelineState::Completed)
            }
            (PipelineState::Running(i), StepEvent::Failed) => Some(PipelineState::Failed(i)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_successes_reach_completed() {
        let len = 3;
        let mut state = PipelineState::start();
        for _ in 0..len {
            state = state.next(StepEvent::Dispatch, len).unwrap();
            state = state.next(StepEvent::Succeeded, len).unwrap();
        }
        assert_eq!(state, PipelineState::Completed);
    }

    #[test]
    fn failure_records_step_index() {
        let state = PipelineState::Running(2).next(StepEvent::Failed, 5);
        assert_eq!(state, Some(PipelineState::Failed(2)));
    }

    #[test]
    fn terminal_states_reject_everything() {
        for state in [PipelineState::Completed, PipelineState::Failed(0)] {
            assert!(state.is_terminal());
            assert_eq!(state.next(StepEvent::Dispatch, 5), None);
            assert_eq!(state.next(StepEvent::Succeeded, 5), None);
            assert_eq!(state.next(StepEvent::Failed, 5), None);
        }
    }

    #[test]
    fn cannot_complete_a_step_that_was_not_dispatched() {
        assert_eq!(PipelineState::Pending(1).next(StepEvent::Succeeded, 5), None);
        assert_eq!(PipelineState::Pending(5).next(StepEvent::Dispatch, 5), None);
    }
}
