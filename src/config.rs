#![forbid(unsafe_code)]

//! Configuration file parsing and validation

pub mod grayflip_toml;

pub use grayflip_toml::{
    ColorOption, Config, ConfigError, DefaultsConfig, OutputConfig, OutputFormat,
};
