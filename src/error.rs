//! Error types for nullwidth.

use thiserror::Error;

/// Result type alias for nullwidth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in nullwidth operations.
///
/// Malformed text content is never an error: noise, stray markers and
/// truncated bit groups all degrade to partial or empty results instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A bit group handed to the bit-level codec was not exactly 8 symbols long.
    #[error("Invalid bit group: expected 8 symbols, got {len}")]
    InvalidBitGroup { len: usize },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
