//! Core Solum library (credential directory, validation, config).

pub mod config;
pub mod directory;
pub mod interrupt;
pub mod submit;
pub mod validator;
