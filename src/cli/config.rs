// CLI configuration
use clap::{Parser, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use wavpatcher::{Mode, WAV_PATTERN};

/// WavPatcher - convert WAV_EXTENSIBLE headers to standard PCM
#[derive(Parser, Debug)]
#[command(name = "wavpatcher")]
#[command(about = "Scan and patch WAV files with WAV_EXTENSIBLE headers to standard PCM format", long_about = None)]
#[command(version)]
#[command(after_help = "Example: wavpatcher /path/to/music --patch")]
pub struct Config {
    /// Directory containing WAV files to process (searched recursively)
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Actually patch files (default is dry-run/scan only)
    #[arg(short, long)]
    pub patch: bool,

    /// Suppress detailed output, only show summary
    #[arg(short, long)]
    pub quiet: bool,

    /// List all files with extensible headers at the end
    #[arg(short, long)]
    pub list: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Worker threads (defaults to the number of logical CPUs). With more than
    /// one, per-file lines appear in completion order; use 1 for a fixed order
    #[arg(short, long)]
    pub jobs: Option<NonZeroUsize>,

    /// File name pattern to search for
    #[arg(long, default_value = WAV_PATTERN)]
    pub pattern: String,

    /// Verbose logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for the run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Progress lines and a summary block
    #[default]
    Text,
    /// One JSON document on stdout
    Json,
}

impl Config {
    pub fn mode(&self) -> Mode {
        if self.patch {
            Mode::Patch
        } else {
            Mode::Scan
        }
    }

    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
