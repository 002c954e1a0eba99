#![forbid(unsafe_code)]

//! Command-line argument definitions
//!
//! The boundary enums here are clap-facing mirrors of the core types; each
//! maps onto its internal counterpart so the rest of the crate never sees
//! clap.

use crate::color::Direction;
use crate::config::{ColorOption, OutputFormat};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Invert grayscale hex colours in icon-theme assets
#[derive(Debug, Parser)]
#[command(name = "grayflip", version, about)]
pub struct Cli {
    /// Root directories to process
    #[arg(value_name = "DIR")]
    pub paths: Vec<PathBuf>,

    /// Which grayscale values to invert
    #[arg(short, long, value_enum)]
    pub direction: Option<DirectionChoice>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatChoice>,

    /// When to colorize human output
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Classify and report without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path (default: ./grayflip.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Inversion direction as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionChoice {
    /// Invert every grayscale value
    Both,
    /// Invert only dark values (convert a dark theme to a light one)
    #[value(alias = "dtl")]
    DarkToLight,
    /// Invert only light values
    #[value(alias = "ltd")]
    LightToDark,
}

impl From<DirectionChoice> for Direction {
    fn from(choice: DirectionChoice) -> Self {
        match choice {
            DirectionChoice::Both => Direction::Both,
            DirectionChoice::DarkToLight => Direction::DarkToLight,
            DirectionChoice::LightToDark => Direction::LightToDark,
        }
    }
}

/// Output format as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatChoice {
    Human,
    Jsonl,
}

impl From<FormatChoice> for OutputFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Human => OutputFormat::Human,
            FormatChoice::Jsonl => OutputFormat::Jsonl,
        }
    }
}

/// Colorization policy as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorOption {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorOption::Auto,
            ColorChoice::Always => ColorOption::Always,
            ColorChoice::Never => ColorOption::Never,
        }
    }
}
