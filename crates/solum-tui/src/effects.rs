//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state; anything that spawns a task or touches
//! the outside world goes through an effect, which keeps the state machine
//! fully testable without a terminal or a tokio runtime.

use std::time::Duration;

use crate::state::AttemptId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application. The runtime cancels any pending login timer.
    Quit,
    /// Schedule the simulated authentication delay; the runtime sends
    /// `UiEvent::LoginDelayElapsed { attempt }` back once `delay` elapses.
    ScheduleLogin { attempt: AttemptId, delay: Duration },
}
