//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use solum_core::{config, interrupt};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "solum")]
#[command(version = "1.0")]
#[command(about = "Solum Medical sign-in portal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// List the email addresses that can sign in
    Accounts,
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;

    // default to the sign-in screen
    let Some(command) = cli.command else {
        // The TUI owns the terminal, so log lines go to a file. The guard
        // must outlive the runtime or buffered lines are dropped.
        let _guard = logging::init_file_logging().context("init logging")?;
        tracing::info!(delay_ms = config.login_delay_ms, "starting sign-in screen");
        return solum_tui::run_login(&config).await;
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Commands::Accounts => {
            commands::accounts::list(&config);
            Ok(())
        }
    }
}
