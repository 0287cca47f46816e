mod cli;
mod application;
mod domain;
mod data;
mod parser;
mod infra;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

/// Log filter used when RUST_LOG is unset or unparseable
const DEFAULT_LOG_FILTER: &str = "syllabus_planner=info";

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialise logging: {e:#}");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = cli::exit_code(&e);
            if code == cli::EXIT_INVALID_INPUT {
                eprintln!("Invalid syllabus: {e:#}");
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::from(code as u8)
        }
    }
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

/// RUST_LOG wins when it parses; otherwise fall back to info for this crate.
fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
