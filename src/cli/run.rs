#![forbid(unsafe_code)]

//! Run dispatch: option resolution, walking, exit codes
//!
//! Options resolve CLI > config file > built-in defaults. The built-in
//! direction stays dark-to-light so an argument-free invocation converts a
//! dark icon set to a light one.

use crate::cli::args::Cli;
use crate::color::Direction;
use crate::config::{ColorOption, Config, ConfigError, OutputFormat};
use crate::engine::{RunSummary, Walker};
use crate::output::{HumanReporter, JsonlReporter, Reporter};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_FILE_FAILURES: i32 = 1;
const EXIT_FATAL: i32 = 2;

/// Root processed when neither the command line nor the config names one
pub const DEFAULT_ROOT: &str = "actions";

/// Direction used when neither the command line nor the config selects one
pub const DEFAULT_DIRECTION: Direction = Direction::DarkToLight;

/// Errors that abort the run before or outside file processing
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

/// Fully resolved run parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub direction: Direction,
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub color: ColorOption,
    pub dry_run: bool,
}

impl RunOptions {
    /// Resolves options from parsed arguments and a loaded config
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        RunOptions {
            direction: cli
                .direction
                .map(Direction::from)
                .or(config.defaults.direction)
                .unwrap_or(DEFAULT_DIRECTION),
            paths: if cli.paths.is_empty() {
                config
                    .defaults
                    .paths
                    .clone()
                    .unwrap_or_else(|| vec![PathBuf::from(DEFAULT_ROOT)])
            } else {
                cli.paths.clone()
            },
            format: cli
                .format
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or(OutputFormat::Human),
            color: cli
                .color
                .map(ColorOption::from)
                .or(config.output.color)
                .unwrap_or(ColorOption::Auto),
            dry_run: cli.dry_run,
        }
    }
}

/// Runs grayflip for the given arguments
///
/// Exit code:
/// - 0: every file processed
/// - 1: run completed, but some files could not be processed
/// - 2: fatal error (unreadable or invalid config, closed output stream)
pub fn run(cli: &Cli) -> i32 {
    match run_inner(cli) {
        Ok(summary) if summary.passed() => EXIT_SUCCESS,
        Ok(_) => EXIT_FILE_FAILURES,
        Err(e) => {
            eprintln!("grayflip: {}", e);
            EXIT_FATAL
        }
    }
}

/// Internal implementation of the run
fn run_inner(cli: &Cli) -> Result<RunSummary, RunError> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let options = RunOptions::resolve(cli, &config);

    let mut reporter: Box<dyn Reporter> = match options.format {
        OutputFormat::Human => Box::new(HumanReporter::stdout(options.color.to_color_choice())),
        OutputFormat::Jsonl => Box::new(JsonlReporter::stdout()),
    };

    let walker = Walker::new(options.direction, options.dry_run);
    let mut summary = RunSummary::new();
    for root in &options.paths {
        walker.process_root(root, reporter.as_mut(), &mut summary)?;
    }
    reporter.run_summary(&summary)?;

    Ok(summary)
}
