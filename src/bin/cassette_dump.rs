//! Summarises a recorded session cassette.
//!
//! Usage: `cassette_dump <cassette.yaml>`
//!
//! Prints the cassette header, a per-method call count with the number of
//! failed calls, and one line per failed call.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::{env, fs, process};

use fsnav::cassette::format::{Cassette, RecordedError};

#[derive(Default)]
struct MethodStats {
    calls: usize,
    errors: usize,
}

fn load(input: &str) -> Result<Cassette, String> {
    let path = PathBuf::from(input);
    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_yaml::from_str(&content).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

fn summarise(cassette: &Cassette) -> String {
    let mut by_method: BTreeMap<String, MethodStats> = BTreeMap::new();
    let mut failures = Vec::new();

    for interaction in &cassette.interactions {
        let key = format!("{}.{}", interaction.port, interaction.method);
        let stats = by_method.entry(key.clone()).or_default();
        stats.calls += 1;
        if let Some(err) = interaction.output.get("err") {
            stats.errors += 1;
            let detail = serde_json::from_value::<RecordedError>(err.clone())
                .map_or_else(|_| err.to_string(), |e| format!("{}: {}", e.kind, e.message));
            failures.push(format!("#{} {key} {} -> {detail}", interaction.seq, interaction.input));
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "Cassette: {}", cassette.name);
    let _ = writeln!(out, "Recorded: {}", cassette.recorded_at.to_rfc3339());
    let _ = writeln!(out, "Platform: {}", cassette.platform);
    let _ = writeln!(out, "Interactions: {}", cassette.interactions.len());
    for (method, stats) in &by_method {
        let _ = writeln!(out, "  {method:<24}{:>6} calls{:>6} errors", stats.calls, stats.errors);
    }
    if !failures.is_empty() {
        let _ = writeln!(out, "Failures:");
        for line in &failures {
            let _ = writeln!(out, "  {line}");
        }
    }
    out
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: cassette_dump <cassette.yaml>");
        process::exit(1);
    }

    match load(&args[1]) {
        Ok(cassette) => print!("{}", summarise(&cassette)),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
