//! Sign-in reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects. This is the single source of truth
//! for the submit and logout transitions.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use solum_core::submit::{self, FieldErrors, Submission};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, AttemptId, Focus, PendingLogin, View};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Terminal(term_event) => handle_terminal_event(state, term_event),
        UiEvent::LoginDelayElapsed { attempt } => handle_login_elapsed(state, attempt),
    }
}

fn handle_terminal_event(state: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if !matches!(key.kind, KeyEventKind::Release) => match state.view {
            View::Form => handle_form_key(state, key),
            View::Welcome { .. } => handle_welcome_key(state, key),
        },
        _ => vec![],
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C always quits, even mid-submission.
    if ctrl && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    // Everything else is disabled while the simulated delay runs; at most
    // one authentication attempt can be in flight.
    if state.form.is_busy() {
        return vec![];
    }

    match key.code {
        KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            state.form.focus = state.form.focus.next();
            vec![]
        }
        KeyCode::Char('r') if ctrl => {
            state.form.reveal_password = !state.form.reveal_password;
            vec![]
        }
        KeyCode::Enter => submit(state),
        _ => {
            match state.form.focus {
                Focus::Email => state.form.email.input(key),
                Focus::Password => state.form.password.input(key),
            }
            vec![]
        }
    }
}

fn handle_welcome_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Enter => {
            logout(state);
            vec![]
        }
        _ => vec![],
    }
}

/// Submit transition: evaluate the fields, then either publish the errors
/// or start the simulated authentication delay.
fn submit(state: &mut AppState) -> Vec<UiEffect> {
    let outcome = submit::evaluate(
        &state.directory,
        state.form.email.text(),
        state.form.password.text(),
    );

    match outcome {
        Submission::Rejected(errors) => {
            tracing::debug!(
                email_error = ?errors.email,
                password_error = ?errors.password,
                "submission rejected"
            );
            state.form.errors = errors;
            vec![]
        }
        Submission::Accepted { email } => {
            let attempt = state.next_attempt();
            tracing::debug!(%email, attempt = attempt.0, "submission accepted");
            state.form.errors = FieldErrors::default();
            state.form.submitting = Some(PendingLogin { attempt, email });
            vec![UiEffect::ScheduleLogin {
                attempt,
                delay: state.login_delay,
            }]
        }
    }
}

/// Completion of the simulated delay. Drops stale completions: only the
/// attempt currently in flight may create the session.
fn handle_login_elapsed(state: &mut AppState, attempt: AttemptId) -> Vec<UiEffect> {
    let Some(pending) = state.form.submitting.take() else {
        return vec![];
    };
    if pending.attempt != attempt {
        state.form.submitting = Some(pending);
        return vec![];
    }

    tracing::debug!(email = %pending.email, "authenticated");
    state.view = View::Welcome {
        email: pending.email,
    };
    vec![]
}

/// Logout transition: destroy the session and reset the form wholesale.
fn logout(state: &mut AppState) {
    tracing::debug!("logged out");
    state.form.reset();
    state.view = View::Form;
}
