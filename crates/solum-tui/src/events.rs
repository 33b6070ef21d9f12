//! Events consumed by the reducer.

use crossterm::event::Event;

use crate::state::AttemptId;

/// All inputs to the reducer. The runtime collects these from the terminal
/// and the inbox channel and feeds them through `update` one at a time.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// Render cadence tick.
    Tick,
    /// Raw terminal input.
    Terminal(Event),
    /// The simulated authentication delay for `attempt` finished.
    ///
    /// Ignored unless `attempt` is still the in-flight submission.
    LoginDelayElapsed { attempt: AttemptId },
}
