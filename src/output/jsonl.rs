#![forbid(unsafe_code)]

//! JSONL progress reporter for machine-readable output
//!
//! Emits one JSON object per line, in traversal order: `directory`, `file`,
//! `decision`, and `failure` records as they happen, then a single `status`
//! record once the run is complete.

use crate::engine::rewriter::ColorDecision;
use crate::engine::summary::RunSummary;
use crate::engine::walker::{DirectoryRecord, FileError};
use crate::output::Reporter;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// JSONL streaming reporter
pub struct JsonlReporter<W: Write> {
    out: W,
}

impl JsonlReporter<io::Stdout> {
    /// Creates a reporter writing to stdout
    pub fn stdout() -> Self {
        JsonlReporter { out: io::stdout() }
    }
}

impl<W: Write> JsonlReporter<W> {
    /// Creates a reporter writing to an arbitrary sink
    pub fn new(out: W) -> Self {
        JsonlReporter { out }
    }

    /// Consumes the reporter, returning the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }

    fn record<T: Serialize>(&mut self, record: &T) -> io::Result<()> {
        let json = serde_json::to_string(record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(self.out, "{}", json)
    }
}

/// Directory record for JSONL output
#[derive(Debug, Serialize)]
struct DirectoryJson<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    path: &'a Path,
    subdirectories: &'a [String],
    files: &'a [String],
}

/// File record for JSONL output
#[derive(Debug, Serialize)]
struct FileJson<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    path: &'a Path,
}

/// Decision record for JSONL output
#[derive(Debug, Serialize)]
struct DecisionJson<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    action: &'static str,
    colour: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    negated_to: Option<&'a str>,
}

/// Failure record for JSONL output
#[derive(Debug, Serialize)]
struct FailureJson<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    path: &'a Path,
    message: String,
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusJson {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    files_processed: u64,
    files_changed: u64,
    negated: u64,
    ignored: u64,
    non_colours: u64,
    failures: u64,
}

impl<W: Write> Reporter for JsonlReporter<W> {
    fn directory(&mut self, record: &DirectoryRecord) -> io::Result<()> {
        self.record(&DirectoryJson {
            record_type: "directory",
            path: &record.path,
            subdirectories: &record.subdirectories,
            files: &record.files,
        })
    }

    fn file_start(&mut self, path: &Path) -> io::Result<()> {
        self.record(&FileJson {
            record_type: "file",
            path,
        })
    }

    fn decision(&mut self, decision: &ColorDecision) -> io::Result<()> {
        let json = match decision {
            ColorDecision::Inverted { from, to } => DecisionJson {
                record_type: "decision",
                action: "negated",
                colour: from,
                negated_to: Some(to),
            },
            ColorDecision::Ignored { literal } => DecisionJson {
                record_type: "decision",
                action: "ignored",
                colour: literal,
                negated_to: None,
            },
            ColorDecision::NonColor { literal } => DecisionJson {
                record_type: "decision",
                action: "non-colour",
                colour: literal,
                negated_to: None,
            },
        };
        self.record(&json)
    }

    fn file_failure(&mut self, error: &FileError) -> io::Result<()> {
        self.record(&FailureJson {
            record_type: "failure",
            path: error.path(),
            message: error.to_string(),
        })
    }

    fn run_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        self.record(&StatusJson {
            record_type: "status",
            passed: summary.passed(),
            files_processed: summary.files_processed as u64,
            files_changed: summary.files_changed as u64,
            negated: summary.inverted as u64,
            ignored: summary.ignored as u64,
            non_colours: summary.non_colors as u64,
            failures: summary.failures.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn render(events: impl FnOnce(&mut JsonlReporter<Vec<u8>>) -> io::Result<()>) -> Vec<serde_json::Value> {
        let mut reporter = JsonlReporter::new(Vec::new());
        events(&mut reporter).unwrap();
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_directory_record() {
        let records = render(|r| {
            r.directory(&DirectoryRecord {
                path: PathBuf::from("actions"),
                subdirectories: vec!["16".to_string()],
                files: vec!["edit.svg".to_string()],
            })
        });

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["type"], "directory");
        assert_eq!(records[0]["path"], "actions");
        assert_eq!(records[0]["subdirectories"][0], "16");
        assert_eq!(records[0]["files"][0], "edit.svg");
    }

    #[test]
    fn test_file_record() {
        let records = render(|r| r.file_start(Path::new("actions/edit.svg")));
        assert_eq!(records[0]["type"], "file");
        assert_eq!(records[0]["path"], "actions/edit.svg");
    }

    #[test]
    fn test_negated_decision_record() {
        let records = render(|r| {
            r.decision(&ColorDecision::Inverted {
                from: "#000000".to_string(),
                to: "#ffffff".to_string(),
            })
        });

        assert_eq!(records[0]["type"], "decision");
        assert_eq!(records[0]["action"], "negated");
        assert_eq!(records[0]["colour"], "#000000");
        assert_eq!(records[0]["negated_to"], "#ffffff");
    }

    #[test]
    fn test_ignored_decision_omits_negated_to() {
        let records = render(|r| {
            r.decision(&ColorDecision::Ignored {
                literal: "#ffffff".to_string(),
            })
        });

        assert_eq!(records[0]["action"], "ignored");
        assert_eq!(records[0]["colour"], "#ffffff");
        assert!(records[0].get("negated_to").is_none());
    }

    #[test]
    fn test_non_colour_decision_record() {
        let records = render(|r| {
            r.decision(&ColorDecision::NonColor {
                literal: "#1a2b3c".to_string(),
            })
        });

        assert_eq!(records[0]["action"], "non-colour");
        assert_eq!(records[0]["colour"], "#1a2b3c");
    }

    #[test]
    fn test_failure_record() {
        let records = render(|r| {
            r.file_failure(&FileError::NonUtf8 {
                path: PathBuf::from("actions/raster.png"),
            })
        });

        assert_eq!(records[0]["type"], "failure");
        assert_eq!(records[0]["path"], "actions/raster.png");
        assert!(
            records[0]["message"]
                .as_str()
                .unwrap()
                .contains("not valid UTF-8")
        );
    }

    #[test]
    fn test_status_record() {
        let records = render(|r| {
            r.run_summary(&RunSummary {
                files_processed: 3,
                files_changed: 2,
                inverted: 5,
                ignored: 1,
                non_colors: 2,
                failures: vec![],
            })
        });

        assert_eq!(records[0]["type"], "status");
        assert_eq!(records[0]["passed"], true);
        assert_eq!(records[0]["files_processed"], 3);
        assert_eq!(records[0]["files_changed"], 2);
        assert_eq!(records[0]["negated"], 5);
        assert_eq!(records[0]["ignored"], 1);
        assert_eq!(records[0]["non_colours"], 2);
        assert_eq!(records[0]["failures"], 0);
    }

    #[test]
    fn test_every_line_is_valid_json() {
        let records = render(|r| {
            r.directory(&DirectoryRecord {
                path: PathBuf::from("actions"),
                subdirectories: vec![],
                files: vec!["edit.svg".to_string()],
            })?;
            r.file_start(Path::new("actions/edit.svg"))?;
            r.decision(&ColorDecision::Inverted {
                from: "#000000".to_string(),
                to: "#ffffff".to_string(),
            })?;
            r.run_summary(&RunSummary::default())
        });

        // render() already parses every line; check ordering here
        assert_eq!(records.len(), 4);
        assert_eq!(records[0]["type"], "directory");
        assert_eq!(records[1]["type"], "file");
        assert_eq!(records[2]["type"], "decision");
        assert_eq!(records[3]["type"], "status");
    }

    #[test]
    fn test_special_characters_in_paths() {
        let records = render(|r| r.file_start(Path::new("actions/my icon's.svg")));
        assert_eq!(records[0]["path"], "actions/my icon's.svg");
    }
}
