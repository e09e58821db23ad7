//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image, and decode errors, and provides semantic variants
//! for argument validation and processing failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Decode error: {0}")]
    Decode(#[from] crate::text::DecodeError),

    #[error("Source file not found at {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Canvas size must be greater than 0, got: {size}")]
    ZeroCanvasSize { size: u32 },

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
