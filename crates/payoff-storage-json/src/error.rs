use std::io;

use payoff_core::PayoffError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),

    #[error("Invalid debt record `{name}`: {reason}")]
    InvalidRecord { name: String, reason: String },
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serde(err.to_string())
    }
}

impl From<StorageError> for PayoffError {
    fn from(err: StorageError) -> Self {
        PayoffError::Repository(err.to_string())
    }
}
