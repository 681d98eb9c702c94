//! Unified error types surfaced by the session API.
//!
//! Wraps collaborator failures and rejected drafts so clients can bubble them
//! up with consistent context. View state edits never appear here; those are
//! recovered inside the reducer.
use scout_core::{DraftError, ErrorSeverity, RecordId, ScoutError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("invalid player draft: {0}")]
    InvalidDraft(#[from] DraftError),

    #[error("record {0} is not in the current collection")]
    UnknownRecord(RecordId),

    #[error("session requires a {0} before building")]
    MissingCollaborator(&'static str),
}

impl RuntimeError {
    /// Severity for logging: collaborator failures are recoverable because the
    /// session keeps its last-known-good data.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Repository(_) => ErrorSeverity::Recoverable,
            Self::InvalidDraft(err) => err.severity(),
            Self::UnknownRecord(_) | Self::MissingCollaborator(_) => ErrorSeverity::Validation,
        }
    }
}
