//! Error types for the fallible outer layers (settings, image output)
//!
//! Drawing itself never fails.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading settings or writing images
#[derive(Error, Debug)]
pub enum BubbleError {
    #[error("Failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Pixel buffer does not match a {width}x{height} image")]
    ImageBuffer { width: u32, height: u32 },

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

impl BubbleError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BubbleError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using BubbleError
pub type Result<T> = std::result::Result<T, BubbleError>;
