//! Error responses shared by every endpoint group.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::ScreeningError;
use crate::domain::foundation::DomainError;

/// Error body returned by all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message,
            details,
        }
    }
}

/// Rejects a malformed `:id` path segment.
pub fn invalid_session_id() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request("Invalid session ID")),
    )
        .into_response()
}

/// Maps an application error to its HTTP status and body.
pub fn handle_screening_error(error: ScreeningError) -> Response {
    let status = match &error {
        ScreeningError::NotFound(_) => StatusCode::NOT_FOUND,
        ScreeningError::Triage(crate::domain::triage::TriageError::InvalidOption { .. }) => {
            StatusCode::BAD_REQUEST
        }
        ScreeningError::Triage(_) | ScreeningError::Incomplete { .. } => StatusCode::CONFLICT,
        ScreeningError::Guidance(_) => StatusCode::BAD_REQUEST,
        ScreeningError::ImageSource(_) => StatusCode::BAD_GATEWAY,
        ScreeningError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = match error {
        ScreeningError::Infrastructure(_) => ErrorResponse::internal("Session storage failed"),
        other => ErrorResponse::from(DomainError::from(other)),
    };

    (status, Json(body)).into_response()
}
