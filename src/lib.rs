#![forbid(unsafe_code)]

//! Grayflip: Batch inversion of grayscale colours in icon-theme assets
//!
//! Grayflip rewrites grayscale `#rrggbb` colour literals found in text files,
//! inverting each channel value to convert icon themes between light and dark
//! colour schemes.

pub mod cli;
pub mod color;
pub mod config;
pub mod engine;
pub mod output;
