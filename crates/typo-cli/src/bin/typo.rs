// typo: report likely typos and repeated words.
//
// Reads the named files (or standard input), scores every word by how well
// its trigrams fit the letter statistics of the whole input, and prints the
// most peculiar words:
//   file:line:byte word repeats
//   file:line:byte [score] word
//
// Usage:
//   typo [-n MAX] [-t THRESHOLD] [-r] [--html] [-w LIST]... [FILE]...
//
// Exit status is 0 on success and 2 when an input cannot be read.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use typo_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();

    match typo_cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("typo: {e:#}");
            ExitCode::from(2)
        }
    }
}
