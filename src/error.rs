//! Error types for rs-page-cleaner.
//!
//! The reduction passes themselves never fail: malformed HTML, broken JSON-LD
//! and unsafe URLs all degrade to a smaller result. Errors only surface at
//! the edges, when user configuration or I/O is involved.

/// Error type for configuration and I/O at the crate boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A user-supplied allowed-tag list contained an invalid tag name.
    #[error("invalid tag name in allowed-tag list: {0:?}")]
    InvalidTag(String),

    /// Reading the input document failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a result to JSON failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;
