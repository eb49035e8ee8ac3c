use std::path::PathBuf;

use crate::filter::OperationMode;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, IcctError>;

#[derive(Debug, thiserror::Error)]
pub enum IcctError {
    #[error("invalid image: {reason}")]
    InvalidImage {
        reason: String,
        #[source]
        source: Option<image::ImageError>,
    },
    #[error("invalid {slot} for {mode}: {value:?} is not an integer in [{min}, {max}]")]
    InvalidParameters {
        mode: OperationMode,
        slot: &'static str,
        value: String,
        min: i32,
        max: i32,
    },
    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("failed to save {}: {reason}", path.display())]
    SaveFailed {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<image::ImageError>,
    },
    #[error("no image loaded")]
    NoImage,
    #[error("invalid hex colour: {0:?}")]
    InvalidHex(String),
    #[error("operation table entry for {mode} is invalid: {reason}")]
    InvalidModeTable {
        mode: OperationMode,
        reason: String,
    },
}

impl IcctError {
    pub(crate) fn invalid_image(reason: impl Into<String>) -> Self {
        Self::InvalidImage {
            reason: reason.into(),
            source: None,
        }
    }
}
