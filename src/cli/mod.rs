//! Command-line frontend standing in for the web presentation layer.
//!
//! Each invocation plays one authorized request: the acting user is
//! resolved by email and the ownership check runs before any
//! business-scoped call, exactly what the access boundary would do
//! ahead of the core.

pub mod commands;
pub mod context;
pub mod output;

use std::env;

use thiserror::Error;

use shopbook_config::ConfigError;
use shopbook_core::CoreError;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid input: {0}")]
    Usage(String),
    #[error("Command failed: {0}")]
    Command(String),
}

/// Entry point used by the binary: dispatches `std::env::args`.
pub fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = env::args().skip(1).collect();
    commands::dispatch(&args)
}
