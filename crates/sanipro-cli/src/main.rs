//! sanipro CLI binary.
//!
//! This is the entry point for the `sanipro` command-line tool. It parses
//! arguments with `clap`, initializes logging via `tracing` at the level
//! chosen by `-v`, and dispatches to batch or interactive mode.

mod cli;
mod commands;

use miette::Result;

fn main() -> Result<()> {
    let args = cli::parse();
    let level = args.log_level()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    commands::dispatch(args)
}
