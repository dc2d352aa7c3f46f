//! Errors raised at the engine's input boundaries
//!
//! Pagination itself cannot fail; only decoding requests and reading input
//! files can.

use thiserror::Error;

/// Errors from the JSON bridge and the command-line front end
#[derive(Debug, Error)]
pub enum PaginationError {
    /// The request could not be decoded.
    #[error("invalid request: {0}")]
    Json(#[from] serde_json::Error),
    /// The request file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Margins and footer leave no room for content, or for the cover on page 1.
    #[error("page geometry leaves no usable area ({width}pt x {height}pt)")]
    InvalidGeometry { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, PaginationError>;
