// Batch processing: file discovery and the per-file scan/patch sequence
//
// Nothing here keeps counters. Each file yields a `FileReport`; callers fold
// reports into a `Summary` when they need totals.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::wav::{inspect, patch, FormatInfo, FormatTag, InspectReason, PatchReason};

/// Default discovery pattern
pub const WAV_PATTERN: &str = "*.wav";

/// What to do with extensible files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Report only, never write
    #[default]
    Scan,
    Patch,
}

/// Terminal state of one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Not a usable RIFF/WAVE container
    Invalid { reason: InspectReason },
    Pcm,
    Other { format_tag: u16 },
    /// Extensible, left alone because of scan mode
    Found { offset: u64 },
    Patched { offset: u64 },
    /// Tag changed between inspection and patch; nothing written
    PatchSkipped { offset: u64 },
    Failed { error: String },
}

impl FileOutcome {
    pub fn is_extensible(&self) -> bool {
        matches!(
            self,
            FileOutcome::Found { .. } | FileOutcome::Patched { .. } | FileOutcome::PatchSkipped { .. }
        )
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Find files under `root` whose names match `pattern`, recursively.
///
/// Matching ignores case so `TAKE1.WAV` is found by `*.wav`. Symlinked
/// directories are not entered, so every file is reached by one path only.
/// Symlinks to regular files are kept. Entries that cannot be read are
/// logged and skipped.
pub fn discover<P: AsRef<Path>>(root: P, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Pattern::new(pattern)?;
    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut files = Vec::new();
    let mut pending = vec![root.as_ref().to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "skipping unreadable directory");
                continue;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(path = %dir.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let path = entry.path();

            // `file_type` does not follow symlinks
            match entry.file_type() {
                Ok(file_type) if file_type.is_dir() => pending.push(path),
                Ok(_) => {
                    let name = entry.file_name();
                    if matcher.matches_with(&name.to_string_lossy(), options) && path.is_file() {
                        files.push(path);
                    }
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                }
            }
        }
    }

    files.sort();
    debug!(pattern, count = files.len(), "discovery finished");
    Ok(files)
}

/// Inspect one file and, in patch mode, patch it if it is extensible.
pub fn process_file(path: &Path, mode: Mode) -> FileReport {
    let outcome = match inspect(path) {
        Ok(info) => settle(path, &info, mode),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "inspection failed");
            FileOutcome::Failed { error: e.to_string() }
        }
    };

    FileReport {
        path: path.to_path_buf(),
        outcome,
    }
}

fn settle(path: &Path, info: &FormatInfo, mode: Mode) -> FileOutcome {
    let tag = match info.tag() {
        Some(tag) => tag,
        None => {
            debug!(path = %path.display(), reason = %info.reason, "skipping unusable file");
            return FileOutcome::Invalid { reason: info.reason };
        }
    };

    let offset = match (tag, info.tag_offset) {
        (FormatTag::Extensible, Some(offset)) => offset,
        (FormatTag::Pcm, _) => return FileOutcome::Pcm,
        (FormatTag::Other(format_tag), _) => return FileOutcome::Other { format_tag },
        (FormatTag::Extensible, None) => return FileOutcome::Invalid { reason: info.reason },
    };

    if mode == Mode::Scan {
        return FileOutcome::Found { offset };
    }

    let result = patch(path, offset);
    match result.reason {
        PatchReason::Ok => FileOutcome::Patched { offset },
        PatchReason::AlreadyPcmOrOther => FileOutcome::PatchSkipped { offset },
        PatchReason::IoError | PatchReason::InvalidOffset => FileOutcome::Failed {
            error: result.message.unwrap_or_else(|| "patch failed".to_string()),
        },
    }
}

/// Totals over a set of file reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub extensible: usize,
    pub patched: usize,
    pub skipped: usize,
    pub invalid: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        reports.iter().fold(Summary::default(), |mut summary, report| {
            summary.total += 1;
            if report.outcome.is_extensible() {
                summary.extensible += 1;
            }
            match report.outcome {
                FileOutcome::Patched { .. } => summary.patched += 1,
                FileOutcome::PatchSkipped { .. } => summary.skipped += 1,
                FileOutcome::Invalid { .. } => summary.invalid += 1,
                FileOutcome::Failed { .. } => summary.failed += 1,
                _ => {}
            }
            summary
        })
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::fixtures::minimal_wav;
    use tempfile::tempdir;

    #[test]
    fn test_discover_recursive_and_case_insensitive() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("album").join("disc 1");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("a.wav"), b"").unwrap();
        fs::write(nested.join("B.WAV"), b"").unwrap();
        fs::write(nested.join("notes.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("folder.wav")).unwrap();

        let files = discover(dir.path(), WAV_PATTERN).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.contains(&dir.path().join("a.wav")));
        assert!(files.contains(&nested.join("B.WAV")));
    }

    #[test]
    fn test_discover_root_with_glob_characters() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("[live] set");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("take.wav"), b"").unwrap();

        assert_eq!(discover(&root, WAV_PATTERN).unwrap(), vec![root.join("take.wav")]);
    }

    #[test]
    fn test_discover_pattern_matches_file_names_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("take.wav"), b"").unwrap();
        fs::write(dir.path().join("take.aiff"), b"").unwrap();

        assert_eq!(discover(dir.path(), "*.aiff").unwrap(), vec![dir.path().join("take.aiff")]);
        assert!(discover(dir.path(), "[").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_does_not_enter_symlinked_directories() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let outside = tempdir().unwrap();
        fs::write(dir.path().join("one.wav"), minimal_wav(0xFFFE)).unwrap();
        fs::write(outside.path().join("two.wav"), minimal_wav(0xFFFE)).unwrap();
        symlink(dir.path(), dir.path().join("loop")).unwrap();
        symlink(outside.path(), dir.path().join("elsewhere")).unwrap();
        symlink(outside.path().join("two.wav"), dir.path().join("linked.wav")).unwrap();

        let files = discover(dir.path(), WAV_PATTERN).unwrap();
        assert_eq!(files, vec![dir.path().join("linked.wav"), dir.path().join("one.wav")]);

        let reports: Vec<FileReport> = files.iter().map(|f| process_file(f, Mode::Scan)).collect();
        let summary = Summary::from_reports(&reports);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.extensible, 2);
    }

    #[test]
    fn test_process_file_states() {
        let dir = tempdir().unwrap();
        let ext = dir.path().join("ext.wav");
        let pcm = dir.path().join("pcm.wav");
        let float = dir.path().join("float.wav");
        let text = dir.path().join("text.wav");
        fs::write(&ext, minimal_wav(0xFFFE)).unwrap();
        fs::write(&pcm, minimal_wav(1)).unwrap();
        fs::write(&float, minimal_wav(3)).unwrap();
        fs::write(&text, b"hello").unwrap();

        assert_eq!(process_file(&ext, Mode::Scan).outcome, FileOutcome::Found { offset: 20 });
        assert_eq!(fs::read(&ext).unwrap(), minimal_wav(0xFFFE));

        assert_eq!(process_file(&ext, Mode::Patch).outcome, FileOutcome::Patched { offset: 20 });
        assert_eq!(fs::read(&ext).unwrap(), minimal_wav(1));
        assert_eq!(process_file(&ext, Mode::Patch).outcome, FileOutcome::Pcm);

        assert_eq!(process_file(&pcm, Mode::Patch).outcome, FileOutcome::Pcm);
        assert_eq!(process_file(&float, Mode::Patch).outcome, FileOutcome::Other { format_tag: 3 });
        assert_eq!(
            process_file(&text, Mode::Patch).outcome,
            FileOutcome::Invalid { reason: InspectReason::NotRiff }
        );
    }

    #[test]
    fn test_process_missing_file_fails() {
        let dir = tempdir().unwrap();
        let report = process_file(&dir.path().join("gone.wav"), Mode::Scan);
        assert!(report.outcome.is_failure());
    }

    #[test]
    fn test_summary_from_reports() {
        let report = |outcome| FileReport { path: PathBuf::from("x.wav"), outcome };
        let reports = vec![
            report(FileOutcome::Patched { offset: 20 }),
            report(FileOutcome::PatchSkipped { offset: 20 }),
            report(FileOutcome::Found { offset: 72 }),
            report(FileOutcome::Pcm),
            report(FileOutcome::Other { format_tag: 3 }),
            report(FileOutcome::Invalid { reason: InspectReason::NoFmtChunk }),
            report(FileOutcome::Failed { error: "denied".to_string() }),
        ];

        let summary = Summary::from_reports(&reports);
        assert_eq!(
            summary,
            Summary { total: 7, extensible: 3, patched: 1, skipped: 1, invalid: 1, failed: 1 }
        );
        assert!(summary.has_failures());
        assert!(!Summary::from_reports(&reports[..6]).has_failures());
    }

    #[test]
    fn test_outcome_serialization() {
        let report = FileReport {
            path: PathBuf::from("a.wav"),
            outcome: FileOutcome::Invalid { reason: InspectReason::Truncated },
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "invalid");
        assert_eq!(json["reason"], "TRUNCATED");
        assert_eq!(json["path"], "a.wav");
    }
}
