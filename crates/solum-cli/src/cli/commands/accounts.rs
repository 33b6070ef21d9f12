//! Accounts command handler.

use solum_core::config::Config;

/// Prints the email addresses the sign-in screen accepts, one per line.
pub fn list(config: &Config) {
    for record in config.directory().records() {
        println!("{}", record.email);
    }
}
