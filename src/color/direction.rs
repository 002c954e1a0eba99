#![forbid(unsafe_code)]

//! Inversion direction policy
//!
//! The direction decides which grayscale values get inverted: all of them,
//! only dark ones (converting a dark theme to a light one), or only light
//! ones. It is chosen once per run and passed down to every rewrite.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The neutral midpoint. Exactly this value is never inverted under either
/// directional mode.
pub const MIDPOINT: u8 = 0x7F;

/// Which grayscale values to invert
///
/// A closed enumeration: an unknown mode cannot be constructed, so the only
/// place an invalid direction can surface is the boundary parse (CLI or
/// config), which fails with [`DirectionParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Invert every grayscale value
    Both,
    /// Invert only values below the midpoint
    #[serde(alias = "dtl")]
    DarkToLight,
    /// Invert only values above the midpoint
    #[serde(alias = "ltd")]
    LightToDark,
}

impl Direction {
    /// Whether a grayscale value should be inverted under this direction
    pub fn should_invert(self, grayscale: u8) -> bool {
        match self {
            Direction::Both => true,
            Direction::DarkToLight => grayscale < MIDPOINT,
            Direction::LightToDark => grayscale > MIDPOINT,
        }
    }

    /// Canonical kebab-case name, as accepted by `from_str`
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Both => "both",
            Direction::DarkToLight => "dark-to-light",
            Direction::LightToDark => "light-to-dark",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for direction values outside the closed enumeration
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid direction {value:?}, expected one of: both, dark-to-light (dtl), light-to-dark (ltd)")]
pub struct DirectionParseError {
    /// The offending value
    pub value: String,
}

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(Direction::Both),
            "dark-to-light" | "dtl" => Ok(Direction::DarkToLight),
            "light-to-dark" | "ltd" => Ok(Direction::LightToDark),
            other => Err(DirectionParseError {
                value: other.to_string(),
            }),
        }
    }
}
