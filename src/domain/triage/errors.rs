//! Triage-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Usage errors raised by the triage state machine.
///
/// Both variants leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriageError {
    #[error("Option '{option}' is not allowed for question '{question_id}'")]
    InvalidOption {
        question_id: String,
        option: String,
        allowed: Vec<String>,
    },

    #[error("Triage is already complete; start a new session to screen again")]
    AlreadyComplete,
}

impl TriageError {
    pub fn invalid_option(
        question_id: impl Into<String>,
        option: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        TriageError::InvalidOption {
            question_id: question_id.into(),
            option: option.into(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TriageError::InvalidOption { .. } => ErrorCode::InvalidOption,
            TriageError::AlreadyComplete => ErrorCode::TriageAlreadyComplete,
        }
    }
}

impl From<TriageError> for DomainError {
    fn from(err: TriageError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            TriageError::InvalidOption {
                question_id,
                allowed,
                ..
            } => base
                .with_detail("question_id", question_id)
                .with_detail("allowed", allowed.join(", ")),
            TriageError::AlreadyComplete => base,
        }
    }
}
