#![forbid(unsafe_code)]

//! CLI argument parsing and run dispatch

pub mod args;
pub mod run;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, DirectionChoice, FormatChoice};
pub use run::{RunError, RunOptions, run};
