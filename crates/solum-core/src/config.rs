//! Configuration management for Solum.
//!
//! Loads configuration from ${SOLUM_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::directory::{CredentialDirectory, CredentialRecord};

/// One account entry in config.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
    pub email: String,
    pub password: String,
}

/// Main configuration structure.
///
/// Load-only: the `config init` template is a static file, so nothing
/// serializes this back to disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated authentication delay in milliseconds.
    pub login_delay_ms: u64,

    /// Accounts that can sign in. Empty means the built-in demo directory.
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            login_delay_ms: Self::DEFAULT_LOGIN_DELAY_MS,
            accounts: Vec::new(),
        }
    }
}

impl Config {
    const DEFAULT_LOGIN_DELAY_MS: u64 = 800;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Config::default())
        }
    }

    /// Writes the default config template to `path`.
    ///
    /// # Errors
    /// Fails if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    /// Builds the credential directory: configured accounts if any,
    /// otherwise the built-in demo set.
    pub fn directory(&self) -> CredentialDirectory {
        if self.accounts.is_empty() {
            CredentialDirectory::built_in()
        } else {
            CredentialDirectory::new(
                self.accounts
                    .iter()
                    .map(|account| CredentialRecord::new(&account.email, &account.password))
                    .collect(),
            )
        }
    }
}

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
pub fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Solum configuration and log directories.
    //!
    //! SOLUM_HOME resolution order:
    //! 1. SOLUM_HOME environment variable (if set)
    //! 2. ~/.config/solum (default)

    use std::path::PathBuf;

    /// Returns the Solum home directory.
    pub fn solum_home() -> PathBuf {
        if let Ok(home) = std::env::var("SOLUM_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("solum"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        solum_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        solum_home().join("logs")
    }
}
