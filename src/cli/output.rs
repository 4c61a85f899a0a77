use colored::Colorize;
use serde::Serialize;

use crate::cli::CliError;

pub fn heading(text: &str) {
    println!("{}", text.bold());
}

pub fn notice(text: &str) {
    println!("{}", text.green());
}

/// Prints a value as pretty JSON, the same shape the HTTP layer would
/// serve.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json =
        serde_json::to_string_pretty(value).map_err(|err| CliError::Command(err.to_string()))?;
    println!("{json}");
    Ok(())
}
