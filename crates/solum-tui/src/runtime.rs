//! Sign-in runtime. Owns the terminal, runs the event loop, executes effects.
//!
//! The runtime uses an "inbox" pattern for async event collection: the
//! scheduled login delay sends its `UiEvent` to `inbox_tx` and the loop
//! drains `inbox_rx` each frame. The reducer stays synchronous and pure.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use solum_core::config::Config;
use solum_core::interrupt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, AttemptId};
use crate::{render, terminal, update};

/// Tick cadence while a submission is in flight (the spinner label needs
/// prompt repaints when the delay fires).
const BUSY_TICK: Duration = Duration::from_millis(50);

/// Tick cadence while idle, to save CPU between keystrokes.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Owns the terminal and state. Runs the event loop and executes effects.
pub struct LoginRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: AppState,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    /// Cancels the in-flight login delay, if any.
    pending_login: Option<CancellationToken>,
    last_tick: Instant,
}

impl LoginRuntime {
    /// Sets up the terminal and builds the runtime from the loaded config.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be put into raw mode.
    pub fn new(config: &Config) -> Result<Self> {
        terminal::install_panic_hook();
        interrupt::set_restore_hook(|| {
            let _ = terminal::restore_terminal();
        });
        let terminal = terminal::setup_terminal()?;
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state: AppState::new(config),
            inbox_tx,
            inbox_rx,
            pending_login: None,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until quit.
    ///
    /// # Errors
    /// Returns `InterruptedError` on Ctrl+C delivered as a signal, or an
    /// error if terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true; // ensure initial render

        while !self.state.should_quit {
            check_interrupt()?;

            let events = self.collect_events()?;

            for event in events {
                // Only Tick triggers render - terminal events update state
                // but batch repaints to the next tick.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the inbox and the terminal, plus the cadence tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let tick_interval = if self.state.form.is_busy() {
            BUSY_TICK
        } else {
            IDLE_TICK
        };

        let mut events = Vec::new();
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick is due unless there is already work,
        // so input stays responsive without spinning.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                if let Some(cancel) = self.pending_login.take() {
                    cancel.cancel();
                }
                self.state.should_quit = true;
            }
            UiEffect::ScheduleLogin { attempt, delay } => {
                // The reducer refuses to submit while busy, but a stale token
                // from a completed attempt may still be held here.
                if let Some(previous) = self.pending_login.take() {
                    previous.cancel();
                }
                let cancel = CancellationToken::new();
                self.pending_login = Some(cancel.clone());

                let tx = self.inbox_tx.clone();
                tokio::spawn(async move {
                    if let Some(event) = run_login_delay(attempt, delay, cancel).await {
                        let _ = tx.send(event);
                    }
                });
            }
        }
    }
}

impl Drop for LoginRuntime {
    fn drop(&mut self) {
        if let Some(cancel) = self.pending_login.take() {
            cancel.cancel();
        }
        let _ = terminal::restore_terminal();
    }
}

/// Converts a pending Ctrl+C signal into `InterruptedError`, consuming the
/// flag. The error propagates out of `run` so main can exit with 130.
fn check_interrupt() -> Result<()> {
    if interrupt::is_interrupted() {
        interrupt::reset();
        return Err(interrupt::InterruptedError.into());
    }
    Ok(())
}

/// Waits out the simulated authentication delay.
///
/// Resolves to the completion event carrying the attempt id, or `None` if
/// the delay was cancelled first.
async fn run_login_delay(
    attempt: AttemptId,
    delay: Duration,
    cancel: CancellationToken,
) -> Option<UiEvent> {
    tokio::select! {
        () = cancel.cancelled() => None,
        () = tokio::time::sleep(delay) => Some(UiEvent::LoginDelayElapsed { attempt }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_signal_surfaces_as_interrupted_error() {
        interrupt::reset();
        assert!(check_interrupt().is_ok());

        // First signal only sets the flag (the second force-exits).
        interrupt::trigger_ctrl_c();
        let err = check_interrupt().expect_err("interrupt should surface");
        assert!(err.downcast_ref::<interrupt::InterruptedError>().is_some());

        // The flag is consumed, so the error fires once per signal.
        assert!(!interrupt::is_interrupted());
        assert!(check_interrupt().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn delay_completion_carries_the_attempt_id() {
        let event = run_login_delay(
            AttemptId(3),
            Duration::from_millis(800),
            CancellationToken::new(),
        )
        .await;
        assert_eq!(
            event,
            Some(UiEvent::LoginDelayElapsed {
                attempt: AttemptId(3)
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_delay_produces_no_event() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let event = run_login_delay(AttemptId(1), Duration::from_secs(60), cancel).await;
        assert_eq!(event, None);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_wins_mid_delay() {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_login_delay(
            AttemptId(2),
            Duration::from_millis(800),
            cancel.clone(),
        ));
        tokio::time::sleep(Duration::from_millis(100)).await;
        cancel.cancel();
        let event = handle.await.expect("task join");
        assert_eq!(event, None);
    }
}
