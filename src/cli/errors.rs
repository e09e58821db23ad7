use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },
}
