#![forbid(unsafe_code)]

//! Directory traversal and in-place file rewriting
//!
//! Roots are walked recursively in sorted order, strictly sequentially. Every
//! regular file is read fully into memory, rewritten, and written back to the
//! same path through a temporary file that is atomically renamed over the
//! original. A failure on one file is recorded and the walk continues.

use crate::color::Direction;
use crate::engine::rewriter::{ColorDecision, Rewriter};
use crate::engine::summary::RunSummary;
use crate::output::Reporter;
use ignore::WalkBuilder;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// A failure scoped to a single file or directory entry
///
/// These never abort the run; they are reported, counted in the summary, and
/// turn the exit code non-zero.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8 text", path.display())]
    NonUtf8 { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to list {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
}

impl FileError {
    /// The path this failure is about
    pub fn path(&self) -> &Path {
        match self {
            FileError::Read { path, .. }
            | FileError::NonUtf8 { path }
            | FileError::Write { path, .. }
            | FileError::List { path, .. }
            | FileError::Walk { path, .. } => path,
        }
    }
}

/// Progress record for one visited directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRecord {
    pub path: PathBuf,
    /// Immediate subdirectory names, sorted
    pub subdirectories: Vec<String>,
    /// Immediate file names, sorted
    pub files: Vec<String>,
}

impl DirectoryRecord {
    /// Lists the immediate children of `path`, split into subdirectories and
    /// files
    pub fn collect(path: &Path) -> Result<Self, FileError> {
        let entries = fs::read_dir(path).map_err(|source| FileError::List {
            path: path.to_path_buf(),
            source,
        })?;

        let mut subdirectories = Vec::new();
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| FileError::List {
                path: path.to_path_buf(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            match entry.file_type() {
                Ok(file_type) if file_type.is_dir() => subdirectories.push(name),
                _ => files.push(name),
            }
        }
        subdirectories.sort();
        files.sort();

        Ok(DirectoryRecord {
            path: path.to_path_buf(),
            subdirectories,
            files,
        })
    }
}

/// Result of processing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    /// One decision per distinct literal found in the file
    pub decisions: Vec<ColorDecision>,
    /// Whether the rewritten content differs from the original
    pub changed: bool,
}

/// Walks directory roots and rewrites every regular file in place
#[derive(Debug, Clone, Copy)]
pub struct Walker {
    rewriter: Rewriter,
    dry_run: bool,
}

impl Walker {
    /// Creates a walker rewriting under `direction`
    ///
    /// With `dry_run` set, files are read and classified but never written.
    pub fn new(direction: Direction, dry_run: bool) -> Self {
        Walker {
            rewriter: Rewriter::new(direction),
            dry_run,
        }
    }

    /// Recursively processes every regular file under `root`
    ///
    /// Directories and files are visited in sorted order. Per-entry failures
    /// are reported and recorded in `summary`; only reporter I/O errors (a
    /// closed stdout, for instance) abort the walk.
    pub fn process_root(
        &self,
        root: &Path,
        reporter: &mut dyn Reporter,
        summary: &mut RunSummary,
    ) -> io::Result<()> {
        let walk = WalkBuilder::new(root)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walk {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    let error = FileError::Walk {
                        path: root.to_path_buf(),
                        source,
                    };
                    reporter.file_failure(&error)?;
                    summary.record_failure(&error);
                    continue;
                }
            };

            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            let is_file = entry.file_type().is_some_and(|t| t.is_file());

            if is_dir {
                match DirectoryRecord::collect(entry.path()) {
                    Ok(record) => reporter.directory(&record)?,
                    Err(error) => {
                        reporter.file_failure(&error)?;
                        summary.record_failure(&error);
                    }
                }
            } else if is_file {
                reporter.file_start(entry.path())?;
                match self.process_file(entry.path()) {
                    Ok(report) => {
                        for decision in &report.decisions {
                            reporter.decision(decision)?;
                        }
                        summary.record_file(&report);
                    }
                    Err(error) => {
                        reporter.file_failure(&error)?;
                        summary.record_failure(&error);
                    }
                }
            }
        }

        Ok(())
    }

    /// Reads, rewrites, and writes back a single file
    pub fn process_file(&self, path: &Path) -> Result<FileReport, FileError> {
        let bytes = fs::read(path).map_err(|source| FileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| FileError::NonUtf8 {
            path: path.to_path_buf(),
        })?;

        let outcome = self.rewriter.rewrite(&text);
        let changed = outcome.text != text;

        if !self.dry_run {
            write_atomic(path, &outcome.text).map_err(|source| FileError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        Ok(FileReport {
            path: path.to_path_buf(),
            decisions: outcome.decisions,
            changed,
        })
    }
}

/// Writes `contents` to a temporary file next to `path` and renames it over
/// the original, preserving the original's permissions
fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents.as_bytes())?;

    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file().set_permissions(metadata.permissions())?;
    }

    tmp.persist(path).map(|_| ()).map_err(|e| e.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::NullReporter;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn read_file(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_process_file_rewrites_in_place() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "icon.svg", "fill=\"#ffffff\"");

        let walker = Walker::new(Direction::Both, false);
        let report = walker.process_file(&path).unwrap();

        assert!(report.changed);
        assert_eq!(read_file(&path), "fill=\"#000000\"");
    }

    #[test]
    fn test_process_file_dry_run_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "icon.svg", "fill=\"#ffffff\"");

        let walker = Walker::new(Direction::Both, true);
        let report = walker.process_file(&path).unwrap();

        assert!(report.changed);
        assert_eq!(read_file(&path), "fill=\"#ffffff\"");
    }

    #[test]
    fn test_process_file_non_utf8_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.png");
        fs::write(&path, [0x89, 0x50, 0x4E, 0x47, 0xFF, 0xFE]).unwrap();

        let walker = Walker::new(Direction::Both, false);
        let error = walker.process_file(&path).unwrap_err();

        assert!(matches!(error, FileError::NonUtf8 { .. }));
        assert_eq!(error.path(), path);
    }

    #[test]
    fn test_process_file_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let walker = Walker::new(Direction::Both, false);
        let error = walker.process_file(&dir.path().join("absent.svg")).unwrap_err();
        assert!(matches!(error, FileError::Read { .. }));
    }

    #[test]
    fn test_process_root_rewrites_nested_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        let top = write_file(dir.path(), "top.svg", "#ffffff");
        let nested = write_file(&dir.path().join("nested"), "inner.svg", "#000000");

        let walker = Walker::new(Direction::DarkToLight, false);
        let mut summary = RunSummary::new();
        walker
            .process_root(dir.path(), &mut NullReporter, &mut summary)
            .unwrap();

        // White is light, untouched; black is dark, inverted to white
        assert_eq!(read_file(&top), "#ffffff");
        assert_eq!(read_file(&nested), "#ffffff");
        assert_eq!(summary.files_processed, 2);
        assert_eq!(summary.files_changed, 1);
        assert!(summary.passed());
    }

    #[test]
    fn test_process_root_continues_past_binary_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a-binary.dat"), [0xFF, 0xFE, 0x00]).unwrap();
        let good = write_file(dir.path(), "z-good.svg", "#000000");

        let walker = Walker::new(Direction::Both, false);
        let mut summary = RunSummary::new();
        walker
            .process_root(dir.path(), &mut NullReporter, &mut summary)
            .unwrap();

        // The failure on the binary file must not stop the good file from
        // being processed
        assert_eq!(read_file(&good), "#ffffff");
        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.failures.len(), 1);
        assert!(!summary.passed());
    }

    #[test]
    fn test_process_root_missing_root_is_recorded_failure() {
        let dir = TempDir::new().unwrap();
        let walker = Walker::new(Direction::Both, false);
        let mut summary = RunSummary::new();
        walker
            .process_root(&dir.path().join("no-such-root"), &mut NullReporter, &mut summary)
            .unwrap();

        assert_eq!(summary.failures.len(), 1);
        assert!(!summary.passed());
    }

    #[test]
    fn test_process_root_unconditional_rewrite_without_changes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "plain.txt", "no colours at all");

        let walker = Walker::new(Direction::Both, false);
        let mut summary = RunSummary::new();
        walker
            .process_root(dir.path(), &mut NullReporter, &mut summary)
            .unwrap();

        assert_eq!(read_file(&path), "no colours at all");
        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.files_changed, 0);
    }

    #[test]
    fn test_directory_record_sorted_listing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        write_file(dir.path(), "b.svg", "");
        write_file(dir.path(), "a.svg", "");

        let record = DirectoryRecord::collect(dir.path()).unwrap();
        assert_eq!(record.subdirectories, vec!["alpha", "zeta"]);
        assert_eq!(record.files, vec!["a.svg", "b.svg"]);
    }

    #[test]
    fn test_write_atomic_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "target.txt", "before");

        write_atomic(&path, "after").unwrap();
        assert_eq!(read_file(&path), "after");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_files_behind() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "target.txt", "before");

        write_atomic(&path, "after").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["target.txt"]);
    }
}
