//! Core library entry for the `fsnav` file explorer.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod navigator;
pub mod ports;
pub mod session;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    execute(&cli)
}

/// Run already-parsed arguments.
///
/// # Errors
///
/// Returns an error string when the start directory is unusable or the
/// command fails.
pub fn execute(cli: &cli::Cli) -> Result<(), String> {
    commands::dispatch(cli)
}
