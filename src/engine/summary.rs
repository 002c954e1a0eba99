#![forbid(unsafe_code)]

//! Run-wide aggregation of decisions and failures
//!
//! The summary accumulates across every root processed in a run and drives
//! both the trailing summary block of the output formats and the process exit
//! code.

use crate::engine::rewriter::ColorDecision;
use crate::engine::walker::{FileError, FileReport};
use std::path::PathBuf;

/// A failure recorded for one file or directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Aggregated result of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files read and classified successfully
    pub files_processed: usize,
    /// Files whose rewritten content differs from the original
    pub files_changed: usize,
    /// Distinct literals inverted
    pub inverted: usize,
    /// Distinct grayscale literals excluded by the direction policy
    pub ignored: usize,
    /// Distinct hex-shaped literals that were not grayscale
    pub non_colors: usize,
    /// Per-entry failures, in encounter order
    pub failures: Vec<FileFailure>,
}

impl RunSummary {
    /// Creates an empty summary
    pub fn new() -> Self {
        RunSummary::default()
    }

    /// Folds one successfully processed file into the summary
    pub fn record_file(&mut self, report: &FileReport) {
        self.files_processed += 1;
        if report.changed {
            self.files_changed += 1;
        }
        for decision in &report.decisions {
            match decision {
                ColorDecision::Inverted { .. } => self.inverted += 1,
                ColorDecision::Ignored { .. } => self.ignored += 1,
                ColorDecision::NonColor { .. } => self.non_colors += 1,
            }
        }
    }

    /// Records a per-entry failure
    pub fn record_failure(&mut self, error: &FileError) {
        self.failures.push(FileFailure {
            path: error.path().to_path_buf(),
            message: error.to_string(),
        });
    }

    /// Whether the run completed without any failure
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    fn create_test_report(decisions: Vec<ColorDecision>, changed: bool) -> FileReport {
        FileReport {
            path: PathBuf::from("actions/icon.svg"),
            decisions,
            changed,
        }
    }

    #[test]
    fn test_empty_summary_passes() {
        let summary = RunSummary::new();
        assert!(summary.passed());
        assert_eq!(summary.files_processed, 0);
        assert_eq!(summary.files_changed, 0);
    }

    #[test]
    fn test_record_file_counts_decisions_by_kind() {
        let mut summary = RunSummary::new();
        summary.record_file(&create_test_report(
            vec![
                ColorDecision::Inverted {
                    from: "#000000".to_string(),
                    to: "#ffffff".to_string(),
                },
                ColorDecision::Ignored {
                    literal: "#ffffff".to_string(),
                },
                ColorDecision::NonColor {
                    literal: "#1a2b3c".to_string(),
                },
            ],
            true,
        ));

        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.files_changed, 1);
        assert_eq!(summary.inverted, 1);
        assert_eq!(summary.ignored, 1);
        assert_eq!(summary.non_colors, 1);
        assert!(summary.passed());
    }

    #[test]
    fn test_record_file_unchanged() {
        let mut summary = RunSummary::new();
        summary.record_file(&create_test_report(vec![], false));

        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.files_changed, 0);
    }

    #[test]
    fn test_record_failure_fails_the_run() {
        let mut summary = RunSummary::new();
        summary.record_failure(&FileError::NonUtf8 {
            path: PathBuf::from("actions/binary.png"),
        });

        assert!(!summary.passed());
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].path, Path::new("actions/binary.png"));
        assert!(summary.failures[0].message.contains("not valid UTF-8"));
    }

    #[test]
    fn test_failures_accumulate_in_encounter_order() {
        let mut summary = RunSummary::new();
        summary.record_failure(&FileError::NonUtf8 {
            path: PathBuf::from("z.png"),
        });
        summary.record_failure(&FileError::Read {
            path: PathBuf::from("a.svg"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });

        let paths: Vec<&Path> = summary.failures.iter().map(|f| f.path.as_path()).collect();
        assert_eq!(paths, vec![Path::new("z.png"), Path::new("a.svg")]);
    }
}
