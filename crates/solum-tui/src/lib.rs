//! Full-screen sign-in TUI for Solum Medical.

pub mod effects;
pub mod events;
pub mod field;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use runtime::LoginRuntime;
use solum_core::config::Config;

/// Runs the interactive sign-in loop until the user quits.
///
/// # Errors
/// Returns an error if stderr is not a terminal or terminal I/O fails.
pub async fn run_login(config: &Config) -> Result<()> {
    // The sign-in screen requires a terminal to render.
    if !stderr().is_terminal() {
        anyhow::bail!("Sign-in requires a terminal.");
    }

    let mut runtime = LoginRuntime::new(config)?;
    runtime.run()
}
