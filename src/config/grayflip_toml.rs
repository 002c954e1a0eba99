#![forbid(unsafe_code)]

//! `grayflip.toml` parsing
//!
//! The config file is optional; when present it supplies defaults that CLI
//! flags override. Unknown keys are rejected so a typo cannot silently fall
//! back to built-in behavior.
//!
//! ```toml
//! [defaults]
//! direction = "dark-to-light"
//! paths = ["actions"]
//!
//! [output]
//! format = "human"
//! color = "auto"
//! ```

use crate::color::Direction;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "grayflip.toml";

/// Errors from loading or parsing a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[defaults]` table: run parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    pub direction: Option<Direction>,
    pub paths: Option<Vec<PathBuf>>,
}

/// `[output]` table: format and colorization
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub color: Option<ColorOption>,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Human,
    Jsonl,
}

/// Colorization policy for human output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    Auto,
    Always,
    Never,
}

impl ColorOption {
    /// Maps onto termcolor's color choice
    pub fn to_color_choice(self) -> termcolor::ColorChoice {
        match self {
            ColorOption::Auto => termcolor::ColorChoice::Auto,
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
        }
    }
}

impl Config {
    /// Loads a config file from `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolves the config for a run
    ///
    /// An explicit path must exist and parse. Otherwise `grayflip.toml` in
    /// the working directory is used when present, and built-in defaults when
    /// it is not.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }
}
