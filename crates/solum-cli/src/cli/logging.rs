//! File-based logging for the sign-in screen.
//!
//! The TUI draws on stdout, so log output goes to daily-rotated files
//! under ${SOLUM_HOME}/logs. Filtering is controlled by SOLUM_LOG.

use anyhow::{Context, Result};
use solum_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes file logging and returns the flush guard. Keep the guard
/// alive for the lifetime of the program.
pub fn init_file_logging() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("create logs dir {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "solum.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("SOLUM_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
