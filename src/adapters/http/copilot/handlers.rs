//! HTTP handler for the stateless copilot.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_screening_error;
use crate::adapters::http::ScreeningAppState;
use crate::application::AskCopilotCommand;

use super::dto::{CopilotRequest, CopilotResponse};

/// POST /api/copilot - Templated guidance for a tier label
pub async fn ask_copilot(
    State(state): State<ScreeningAppState>,
    Json(req): Json<CopilotRequest>,
) -> Response {
    let cmd = AskCopilotCommand {
        message: Some(req.message),
        risk: req.risk,
    };

    match state.ask_copilot_handler().handle(cmd).await {
        Ok(reply) => (StatusCode::OK, Json(CopilotResponse::from(reply))).into_response(),
        Err(e) => handle_screening_error(e),
    }
}
