//! Route configuration for triage endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::ScreeningAppState;

use super::handlers::{
    converse, get_result, get_snapshot, get_transcript, get_triage, list_questions,
    start_triage, submit_answer,
};

/// Creates the triage router. Paths are relative to `/api`.
pub fn triage_router() -> Router<ScreeningAppState> {
    Router::new()
        .route("/questions", get(list_questions))
        .route("/triage", post(start_triage))
        .route("/triage/:id", get(get_triage))
        .route("/triage/:id/answers", post(submit_answer))
        .route("/triage/:id/result", get(get_result))
        .route("/triage/:id/snapshot", get(get_snapshot))
        .route("/triage/:id/copilot", post(converse))
        .route("/triage/:id/transcript", get(get_transcript))
}
