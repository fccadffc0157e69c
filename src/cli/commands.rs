// CLI command implementation
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use rayon::prelude::*;
use tracing::debug;
use wavpatcher::{discover, process_file, FileReport, Summary};

use crate::cli::output::{OutputFormatter, ProgressBar, Report};
use crate::cli::{CliError, CliResult, Config, OutputFormat};

/// Scan (and in patch mode, patch) every matching file under the directory.
///
/// Per-file failures end up in the summary; only problems that prevent the
/// run from starting are returned as errors.
pub fn command_run(config: &Config) -> CliResult<Summary> {
    let directory = &config.directory;
    if !directory.exists() {
        return Err(CliError::DirectoryNotFound(directory.clone()));
    }
    if !directory.is_dir() {
        return Err(CliError::NotADirectory(directory.clone()));
    }

    let mode = config.mode();
    let formatter = OutputFormatter::new(config.format, config.quiet);

    let files = discover(directory, &config.pattern)?;
    formatter.print_header(mode, directory, &config.pattern, files.len());

    let progress = ProgressBar::new(files.len(), formatter.is_live());
    let pool = build_pool(config.jobs)?;
    debug!(threads = pool.current_num_threads(), files = files.len(), ?mode, "starting run");

    let work = |path: &PathBuf| {
        let report = process_file(path, mode);
        formatter.print_file(&report);
        progress.increment();
        report
    };

    // A single worker keeps per-file lines in discovery order
    let reports: Vec<FileReport> = if pool.current_num_threads() == 1 {
        files.iter().map(work).collect()
    } else {
        pool.install(|| files.par_iter().map(work).collect())
    };

    let summary = Summary::from_reports(&reports);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.format {
        OutputFormat::Text => {
            formatter.write_summary(&summary, mode, &mut out)?;
            if config.list {
                formatter.write_list(&reports, &mut out)?;
            }
        }
        OutputFormat::Json => {
            let report = Report::new(directory, mode, summary, &reports);
            formatter.write_report(&report, &mut out)?;
        }
    }
    out.flush()?;

    Ok(summary)
}

fn build_pool(jobs: Option<NonZeroUsize>) -> CliResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = jobs {
        builder = builder.num_threads(jobs.get());
    }
    Ok(builder.build()?)
}
