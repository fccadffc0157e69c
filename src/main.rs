// CLI binary entry point for wavpatcher
//
// Scans a directory tree for WAV_EXTENSIBLE files and, with --patch,
// rewrites their format tag to PCM.

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Config, EXIT_FATAL, EXIT_FILE_ERRORS};

fn main() -> ExitCode {
    let config = Config::parse();
    init_logging(&config);

    match run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(config: &Config) -> anyhow::Result<ExitCode> {
    let summary = cli::commands::command_run(config)
        .with_context(|| format!("cannot process {}", config.directory.display()))?;

    if summary.has_failures() {
        Ok(ExitCode::from(EXIT_FILE_ERRORS))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Logs go to stderr so stdout stays clean for reports
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
