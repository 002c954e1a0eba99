#![forbid(unsafe_code)]

//! Rewrite engine: text scanning, directory traversal, run aggregation

pub mod rewriter;
pub mod summary;
pub mod walker;

pub use rewriter::{ColorDecision, RewriteOutcome, Rewriter};
pub use summary::{FileFailure, RunSummary};
pub use walker::{DirectoryRecord, FileError, FileReport, Walker};
