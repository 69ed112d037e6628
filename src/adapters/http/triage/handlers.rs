//! HTTP handlers for triage endpoints.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_screening_error, invalid_session_id};
use crate::adapters::http::ScreeningAppState;
use crate::application::{
    ConverseCommand, GetResultQuery, GetSnapshotQuery, GetTranscriptQuery, GetTriageQuery,
    SubmitAnswerCommand,
};
use crate::domain::foundation::SessionId;
use crate::domain::triage::QuestionCatalog;

use super::dto::{
    ConverseRequest, ConverseResponse, QuestionListResponse, QuestionResponse,
    SubmitAnswerRequest, TranscriptResponse, TriageResponse, TriageResultResponse, TurnResponse,
};

/// GET /api/questions - The question catalog in asking order
pub async fn list_questions() -> Json<QuestionListResponse> {
    let catalog = QuestionCatalog::standard();
    Json(QuestionListResponse {
        questions: catalog.iter().map(QuestionResponse::from).collect(),
        total: catalog.len(),
    })
}

/// POST /api/triage - Start a new session
pub async fn start_triage(State(state): State<ScreeningAppState>) -> Response {
    match state.start_triage_handler().handle().await {
        Ok(record) => (StatusCode::CREATED, Json(TriageResponse::from(&record))).into_response(),
        Err(e) => handle_screening_error(e),
    }
}

/// GET /api/triage/:id - Current session state
pub async fn get_triage(
    State(state): State<ScreeningAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return invalid_session_id();
    };

    match state
        .get_triage_handler()
        .handle(GetTriageQuery { session_id })
        .await
    {
        Ok(record) => (StatusCode::OK, Json(TriageResponse::from(&record))).into_response(),
        Err(e) => handle_screening_error(e),
    }
}

/// POST /api/triage/:id/answers - Answer the current question
pub async fn submit_answer(
    State(state): State<ScreeningAppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Response {
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return invalid_session_id();
    };

    let cmd = SubmitAnswerCommand {
        session_id,
        option: req.option,
    };

    match state.submit_answer_handler().handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(TriageResponse::from(&result.record))).into_response(),
        Err(e) => handle_screening_error(e),
    }
}

/// GET /api/triage/:id/result - Assessment and next-steps panel
pub async fn get_result(
    State(state): State<ScreeningAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return invalid_session_id();
    };

    match state
        .get_result_handler()
        .handle(GetResultQuery { session_id })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(TriageResultResponse::from(view))).into_response(),
        Err(e) => handle_screening_error(e),
    }
}

/// GET /api/triage/:id/snapshot - Key-value form for client-side storage
pub async fn get_snapshot(
    State(state): State<ScreeningAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return invalid_session_id();
    };

    match state
        .get_snapshot_handler()
        .handle(GetSnapshotQuery { session_id })
        .await
    {
        Ok(entries) => (StatusCode::OK, Json::<BTreeMap<String, String>>(entries)).into_response(),
        Err(e) => handle_screening_error(e),
    }
}

/// POST /api/triage/:id/copilot - Ask the copilot about this session's result
pub async fn converse(
    State(state): State<ScreeningAppState>,
    Path(session_id): Path<String>,
    Json(req): Json<ConverseRequest>,
) -> Response {
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return invalid_session_id();
    };

    let cmd = ConverseCommand {
        session_id,
        message: req.message,
    };

    match state.converse_handler().handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(ConverseResponse::from(result))).into_response(),
        Err(e) => handle_screening_error(e),
    }
}

/// GET /api/triage/:id/transcript - Copilot conversation history
pub async fn get_transcript(
    State(state): State<ScreeningAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return invalid_session_id();
    };

    match state
        .get_transcript_handler()
        .handle(GetTranscriptQuery { session_id })
        .await
    {
        Ok(transcript) => {
            let response = TranscriptResponse {
                session_id: session_id.to_string(),
                turns: transcript.turns().iter().map(TurnResponse::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_screening_error(e),
    }
}
