//! Error types raised by repository implementations.

use scout_core::RecordId;
use thiserror::Error;

/// Errors surfaced by record store and snapshot service implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {0} not found")]
    NotFound(RecordId),

    #[error("record ids exhausted")]
    IdsExhausted,

    #[error("remote service unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
