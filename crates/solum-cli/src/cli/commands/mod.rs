//! CLI command handlers.

pub mod accounts;
pub mod config;
