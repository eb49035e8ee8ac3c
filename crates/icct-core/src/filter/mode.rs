//! The seven filter operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which transform runs and which parameter slots it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    /// Brightness and contrast on the colour channels.
    Adjust,
    /// Keep pixels of one exact colour, paint the rest black or white.
    Specific,
    /// Add a signed offset per channel.
    Intensity,
    /// Luma greyscale.
    Greyscale,
    /// Absolute difference from a single amount.
    Inverse,
    /// Zero channels above a per-channel cap.
    Ceiling,
    /// Zero channels below a per-channel floor.
    Floor,
}

impl OperationMode {
    /// Every mode, in menu order.
    pub const ALL: [OperationMode; 7] = [
        OperationMode::Adjust,
        OperationMode::Specific,
        OperationMode::Intensity,
        OperationMode::Greyscale,
        OperationMode::Inverse,
        OperationMode::Ceiling,
        OperationMode::Floor,
    ];

    /// Human-readable label for menus and status text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Adjust => "Adjust",
            Self::Specific => "Specific",
            Self::Intensity => "Intensity",
            Self::Greyscale => "Greyscale",
            Self::Inverse => "Inverse",
            Self::Ceiling => "Ceiling",
            Self::Floor => "Floor",
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation mode {0:?}")]
pub struct UnknownMode(pub String);

impl FromStr for OperationMode {
    type Err = UnknownMode;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}
