//! Codec error types.

use domain::ParseTimestampError;
use thiserror::Error;

/// Errors that can occur while decoding a user record.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not JSON, not an object, or a field has the wrong type.
    #[error("Malformed user record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A required key is absent or null.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// `created_at` is not an ISO-8601 timestamp.
    #[error("Invalid created_at: {0}")]
    InvalidTimestamp(#[from] ParseTimestampError),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
