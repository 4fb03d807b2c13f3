//! Custom error types for STL decoding

use std::fmt;
use std::io;
use std::path::PathBuf;

/// STL-specific error types
#[derive(Debug)]
pub enum StlError {
    /// I/O error from the underlying byte source
    IoError(io::Error),
    /// Empty byte source or unexpected file name
    InvalidArgument(String),
    /// Referenced file does not exist
    NotFound(PathBuf),
    /// Byte source does not match the expected layout
    FormatError(String),
    /// Operation invoked on a closed handle
    UseAfterDispose,
    /// The raster could not be encoded into an image file
    EncodeError(String),
}

impl fmt::Display for StlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StlError::IoError(e) => write!(f, "I/O error: {}", e),
            StlError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            StlError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            StlError::FormatError(msg) => write!(f, "Invalid STL file: {}", msg),
            StlError::UseAfterDispose => write!(f, "STL file handle has already been closed"),
            StlError::EncodeError(msg) => write!(f, "Image encoding error: {}", msg),
        }
    }
}

impl std::error::Error for StlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StlError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StlError {
    fn from(error: io::Error) -> Self {
        StlError::IoError(error)
    }
}

impl From<image::ImageError> for StlError {
    fn from(error: image::ImageError) -> Self {
        StlError::EncodeError(error.to_string())
    }
}

/// Result type for STL operations
pub type StlResult<T> = Result<T, StlError>;
