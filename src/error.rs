//! Error types for board, persistence, and image-processing operations.
//!
//! Every user-facing failure here is non-fatal: callers surface a toast and
//! the board stays interactive.

use thiserror::Error;

/// Errors that can occur across the moodboard engine.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Input rejected before any state was mutated (bad embed URL, blank
    /// save name, non-image upload).
    #[error("{0}")]
    Validation(String),

    /// A saved board with the given name does not exist.
    #[error("no saved board named \"{0}\"")]
    NotFound(String),

    /// IO error from the blob store.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure at the persistence boundary.
    #[error("storage error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image decode/encode failure.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Background-removal task failure (no source image, decode failure,
    /// worker unavailable).
    #[error("processing failed: {0}")]
    Processing(String),

    /// An item with this id is already on the board. The id generation
    /// policy makes this a programming-error-class fault.
    #[error("duplicate item id: {0}")]
    DuplicateId(String),
}

/// Result type alias for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
