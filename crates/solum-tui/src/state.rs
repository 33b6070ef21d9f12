//! Application state for the sign-in TUI.
//!
//! State hierarchy:
//!
//! ```text
//! AppState
//! ├── view: View            (Form or Welcome - exactly one is active)
//! ├── form: FormState       (field buffers, focus, errors, busy flag)
//! ├── directory             (read-only credential table)
//! └── login_delay           (simulated authentication delay)
//! ```
//!
//! The session is the `View::Welcome` variant itself: an authenticated
//! email exists if and only if the welcome view is showing.

use std::time::Duration;

use solum_core::config::Config;
use solum_core::directory::CredentialDirectory;
use solum_core::submit::FieldErrors;

use crate::field::FieldBuffer;

/// Identifier for one scheduled login attempt.
///
/// The delay completion event carries this id; a completion whose id no
/// longer matches the in-flight attempt is dropped, so a timer that
/// outlives its attempt can never mutate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptId(pub u64);

/// Which view is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// The sign-in form (covers both the idle and the error state).
    Form,
    /// Signed in as `email` until logout.
    Welcome { email: String },
}

/// Which form field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Email,
    Password,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Email => Focus::Password,
            Focus::Password => Focus::Email,
        }
    }
}

/// An accepted submission waiting out the simulated delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLogin {
    pub attempt: AttemptId,
    /// Trimmed email to sign in as when the delay fires.
    pub email: String,
}

/// Sign-in form state.
#[derive(Debug, Clone)]
pub struct FormState {
    pub email: FieldBuffer,
    pub password: FieldBuffer,
    pub reveal_password: bool,
    pub focus: Focus,
    /// Errors from the last submission attempt. Persist until the next
    /// attempt; typing does not clear them.
    pub errors: FieldErrors,
    /// Set while the simulated authentication delay is running. Inputs and
    /// the submit control are disabled while this is `Some`.
    pub submitting: Option<PendingLogin>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            email: FieldBuffer::default(),
            password: FieldBuffer::default(),
            reveal_password: false,
            focus: Focus::Email,
            errors: FieldErrors::default(),
            submitting: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.submitting.is_some()
    }

    /// Resets the form to its initial empty state (logout semantics).
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Combined application state.
pub struct AppState {
    pub should_quit: bool,
    pub view: View,
    pub form: FormState,
    pub directory: CredentialDirectory,
    pub login_delay: Duration,
    /// Monotonic counter backing `AttemptId`.
    pub attempt_seq: u64,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            view: View::Form,
            form: FormState::new(),
            directory: config.directory(),
            login_delay: config.login_delay(),
            attempt_seq: 0,
        }
    }

    pub fn next_attempt(&mut self) -> AttemptId {
        self.attempt_seq += 1;
        AttemptId(self.attempt_seq)
    }

    /// The authenticated email, if the welcome view is showing.
    pub fn authenticated_email(&self) -> Option<&str> {
        match &self.view {
            View::Form => None,
            View::Welcome { email } => Some(email),
        }
    }
}
