//! CLI error types.

use std::path::PathBuf;

use codec::DecodeError;
use domain::{DomainError, ProductId, UserId};
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The dataset file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The dataset file is not valid JSON of the expected shape.
    #[error("Invalid dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    /// A user record failed to decode.
    #[error("Invalid user record: {0}")]
    Decode(#[from] DecodeError),

    /// A domain operation rejected its arguments.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A product id is not in the dataset.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// A user id is not in the dataset.
    #[error("Unknown user: {0}")]
    UnknownUser(UserId),
}

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
