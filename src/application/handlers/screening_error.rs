//! ScreeningError - failures surfaced by the application handlers.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::guidance::GuidanceError;
use crate::domain::triage::{SnapshotError, TriageError};
use crate::ports::{ImageSourceError, SessionStoreError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreeningError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Triage is not complete yet: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error(transparent)]
    Triage(#[from] TriageError),

    #[error(transparent)]
    Guidance(#[from] GuidanceError),

    #[error("Image classification failed: {0}")]
    ImageSource(#[from] ImageSourceError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl ScreeningError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ScreeningError::NotFound(_) => ErrorCode::SessionNotFound,
            ScreeningError::Incomplete { .. } => ErrorCode::TriageIncomplete,
            ScreeningError::Triage(err) => err.code(),
            ScreeningError::Guidance(err) => err.code(),
            ScreeningError::ImageSource(_) => ErrorCode::ImageSourceError,
            ScreeningError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<SessionStoreError> for ScreeningError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => ScreeningError::NotFound(id),
            other => ScreeningError::Infrastructure(other.to_string()),
        }
    }
}

impl From<SnapshotError> for ScreeningError {
    fn from(err: SnapshotError) -> Self {
        ScreeningError::Infrastructure(err.to_string())
    }
}

impl From<ScreeningError> for DomainError {
    fn from(err: ScreeningError) -> Self {
        match err {
            ScreeningError::Triage(inner) => inner.into(),
            ScreeningError::Guidance(inner) => inner.into(),
            ScreeningError::NotFound(id) => {
                DomainError::new(ErrorCode::SessionNotFound, format!("Session not found: {}", id))
                    .with_detail("session_id", id.to_string())
            }
            other => DomainError::new(other.code(), other.message()),
        }
    }
}
