use math::{DecodeError, InterpolationError};
use thiserror::Error;

/// Result type specialized for recovery operations.
pub type RecoveryResult<T> = std::result::Result<T, RecoveryError>;

/// Errors that can arise while recovering a constant term from shares.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error(
        "Invalid threshold configuration: threshold {0} must be between 1 and the share count {1}"
    )]
    InvalidThreshold(usize, usize),
    #[error("Need {required} points but found {available}")]
    InsufficientPoints { required: usize, available: usize },
    #[error("Invalid share index: {0}")]
    InvalidShareIndex(u64),
    #[error("share {index}: {source}")]
    Decode {
        index: u64,
        #[source]
        source: DecodeError,
    },
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Errors raised while reading a share document.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("could not read share document: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed share document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not find 'keys' section in share document")]
    MissingKeys,
    #[error("'keys' section appears more than once")]
    DuplicateKeys,
    #[error("share {0} appears more than once")]
    DuplicateIndex(u64),
    #[error("share {index}: {source}")]
    InvalidEntry {
        index: u64,
        #[source]
        source: serde_json::Error,
    },
}

impl RecoveryError {
    pub(crate) fn decode(index: u64, source: DecodeError) -> Self {
        RecoveryError::Decode { index, source }
    }
}
