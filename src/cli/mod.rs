// CLI module for wavpatcher
//
// Argument parsing, the scan/patch run, and human/JSON output. The library
// does the per-file work; everything here is presentation and aggregation.

pub mod commands;
pub mod config;
pub mod output;

use std::path::PathBuf;

pub use config::{Config, OutputFormat};

/// Exit status when the run could not start
pub const EXIT_FATAL: u8 = 1;
/// Exit status when the run finished but some files failed
pub const EXIT_FILE_ERRORS: u8 = 2;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("file discovery failed: {0}")]
    Discovery(#[from] wavpatcher::WavError),

    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
