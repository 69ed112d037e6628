//! Guidance-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::triage::UnknownRiskTier;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuidanceError {
    /// The tier label is outside Low/Medium/High. Never defaulted.
    #[error(transparent)]
    UnknownRiskTier(#[from] UnknownRiskTier),

    #[error("Message cannot be empty")]
    EmptyMessage,
}

impl GuidanceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GuidanceError::UnknownRiskTier(_) => ErrorCode::UnknownRiskTier,
            GuidanceError::EmptyMessage => ErrorCode::EmptyMessage,
        }
    }
}

impl From<GuidanceError> for DomainError {
    fn from(err: GuidanceError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
