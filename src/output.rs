#![forbid(unsafe_code)]

//! Progress reporting: human-readable and JSONL reporters

pub mod human;
pub mod jsonl;

use crate::engine::rewriter::ColorDecision;
use crate::engine::summary::RunSummary;
use crate::engine::walker::{DirectoryRecord, FileError};
use std::io;
use std::path::Path;

pub use human::HumanReporter;
pub use jsonl::JsonlReporter;

/// Sink for the progress events the walker emits while it runs
///
/// Events arrive in traversal order: a directory record per visited
/// directory, a file-start per file, then one decision per distinct literal
/// in that file. The run summary is delivered once, after every root has been
/// processed.
pub trait Reporter {
    fn directory(&mut self, record: &DirectoryRecord) -> io::Result<()>;
    fn file_start(&mut self, path: &Path) -> io::Result<()>;
    fn decision(&mut self, decision: &ColorDecision) -> io::Result<()>;
    fn file_failure(&mut self, error: &FileError) -> io::Result<()>;
    fn run_summary(&mut self, summary: &RunSummary) -> io::Result<()>;
}

/// Reporter that discards every event
///
/// Useful when only the accumulated [`RunSummary`] matters.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn directory(&mut self, _record: &DirectoryRecord) -> io::Result<()> {
        Ok(())
    }

    fn file_start(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn decision(&mut self, _decision: &ColorDecision) -> io::Result<()> {
        Ok(())
    }

    fn file_failure(&mut self, _error: &FileError) -> io::Result<()> {
        Ok(())
    }

    fn run_summary(&mut self, _summary: &RunSummary) -> io::Result<()> {
        Ok(())
    }
}
