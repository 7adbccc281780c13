//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetterError {
    /// A rotation quadrant outside {0,1,2,3} reached a transform. This is a
    /// programming error, not an operator mistake.
    #[error("invalid rotation quadrant {0} (must be 0..=3)")]
    InvalidRotation(u8),

    #[error("frame source error: {0}")]
    Frame(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
