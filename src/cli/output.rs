// Output formatting for CLI

use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;
use wavpatcher::{FileOutcome, FileReport, Mode, Summary};

use crate::cli::{CliResult, OutputFormat};

const RULE_WIDTH: usize = 50;
const PROGRESS_EVERY: usize = 100;

/// JSON document emitted with `--format json`
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: String,
    pub directory: &'a Path,
    pub mode: Mode,
    pub summary: Summary,
    pub files: &'a [FileReport],
}

impl<'a> Report<'a> {
    pub fn new(directory: &'a Path, mode: Mode, summary: Summary, files: &'a [FileReport]) -> Self {
        Report {
            generated_at: chrono::Utc::now().to_rfc3339(),
            directory,
            mode,
            summary,
            files,
        }
    }
}

/// Format and output run results
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Per-file lines and progress are only shown for non-quiet text output
    pub fn is_live(&self) -> bool {
        self.format == OutputFormat::Text && !self.quiet
    }

    pub fn print_header(&self, mode: Mode, directory: &Path, pattern: &str, total: usize) {
        if !self.is_live() {
            return;
        }
        if total == 0 {
            println!("No {} files could be found!", pattern);
            return;
        }
        let mode_str = match mode {
            Mode::Scan => "DRY-RUN (scan only)",
            Mode::Patch => "PATCH MODE",
        };
        println!("WavPatcher - {}", mode_str);
        println!("Directory: {}", directory.display());
        println!("Total WAV files to scan: {}\n", total);
    }

    /// Print the line for one finished file. Safe to call from worker threads.
    pub fn print_file(&self, report: &FileReport) {
        if !self.is_live() {
            return;
        }
        if let Some(line) = file_line(report) {
            if report.outcome.is_failure() {
                eprintln!("{}", line);
            } else {
                println!("{}", line);
            }
        }
    }

    pub fn write_summary(&self, summary: &Summary, mode: Mode, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(writer, "SUMMARY")?;
        writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(writer, "Total files scanned:      {}", summary.total)?;
        writeln!(writer, "Extensible headers found: {}", summary.extensible)?;
        if mode == Mode::Patch && summary.extensible > 0 {
            writeln!(writer, "Files patched:            {}", summary.patched)?;
        }
        if summary.skipped > 0 {
            writeln!(writer, "Changed since scan:       {}", summary.skipped)?;
        }
        if summary.failed > 0 {
            writeln!(writer, "Files with errors:        {}", summary.failed)?;
        }
        Ok(())
    }

    pub fn write_list(&self, reports: &[FileReport], writer: &mut impl Write) -> io::Result<()> {
        let mut extensible = reports.iter().filter(|r| r.outcome.is_extensible()).peekable();
        if extensible.peek().is_none() {
            return Ok(());
        }
        writeln!(writer, "\nFiles with extensible headers:")?;
        for report in extensible {
            writeln!(writer, "  {}", report.path.display())?;
        }
        Ok(())
    }

    pub fn write_report(&self, report: &Report<'_>, writer: &mut impl Write) -> CliResult<()> {
        writeln!(writer, "{}", serde_json::to_string_pretty(report)?)?;
        Ok(())
    }
}

/// Status line for a file, if the outcome is worth a line
pub fn file_line(report: &FileReport) -> Option<String> {
    let path = report.path.display();
    match &report.outcome {
        FileOutcome::Found { .. } => Some(format!("[FOUND] {}", path)),
        FileOutcome::Patched { .. } => Some(format!("[PATCHED] {}", path)),
        FileOutcome::PatchSkipped { .. } => Some(format!("[SKIPPED] {} (tag changed since scan)", path)),
        FileOutcome::Failed { error } => Some(format!("[ERROR] {}: {}", path, error)),
        FileOutcome::Invalid { .. } | FileOutcome::Pcm | FileOutcome::Other { .. } => None,
    }
}

/// Progress indicator shared by the worker threads
pub struct ProgressBar {
    total: usize,
    current: AtomicUsize,
    show: bool,
}

impl ProgressBar {
    pub fn new(total: usize, show: bool) -> Self {
        Self {
            total,
            current: AtomicUsize::new(0),
            show,
        }
    }

    pub fn increment(&self) {
        let current = self.current.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(line) = self.line(current) {
            println!("{}", line);
        }
    }

    fn line(&self, current: usize) -> Option<String> {
        if !self.show || self.total == 0 || current % PROGRESS_EVERY != 0 {
            return None;
        }
        let percent = (current as f64 / self.total as f64) * 100.0;
        Some(format!("Progress: {:.1}% ({}/{})", percent, current, self.total))
    }
}
