//! Error types for toydct operations

use thiserror::Error;

/// Result type for toydct operations
pub type ToyDctResult<T> = Result<T, ToyDctError>;

/// Errors that can abort a pipeline run
#[derive(Error, Debug)]
pub enum ToyDctError {
    #[error("Pixel ({x}, {y}) out of range for {width}x{height} image")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
