//! Binary entrypoint for the `fsnav` CLI.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr so they never mix with listings; RUST_LOG overrides.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Recording is handled in commands::dispatch via FSNAV_RECORD=<file>.
    let cli = fsnav::cli::Cli::parse();
    match fsnav::execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
