//! HTTP handler for image analysis.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_screening_error, invalid_session_id};
use crate::adapters::http::ScreeningAppState;
use crate::application::ScanForSessionCommand;
use crate::domain::foundation::SessionId;
use crate::domain::imaging::ImageUpload;

use super::dto::AnalyzeImageResponse;

/// POST /api/analyze-image - Classify a skin photo
///
/// The raw request body is the image. An empty body is accepted.
pub async fn analyze_image(
    State(state): State<ScreeningAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match state
        .analyze_image_handler()
        .handle(upload_from(&headers, body))
        .await
    {
        Ok(classification) => (
            StatusCode::OK,
            Json(AnalyzeImageResponse::from(classification)),
        )
            .into_response(),
        Err(e) => handle_screening_error(e),
    }
}

/// POST /api/triage/:id/scan - Classify a photo and keep the candidates on the session
pub async fn scan_for_session(
    State(state): State<ScreeningAppState>,
    Path(session_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return invalid_session_id();
    };

    let cmd = ScanForSessionCommand {
        session_id,
        upload: upload_from(&headers, body),
    };

    match state.scan_for_session_handler().handle(cmd).await {
        Ok(classification) => (
            StatusCode::OK,
            Json(AnalyzeImageResponse::from(classification)),
        )
            .into_response(),
        Err(e) => handle_screening_error(e),
    }
}

fn upload_from(headers: &HeaderMap, body: Bytes) -> ImageUpload {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    ImageUpload::new(content_type, body.to_vec())
}
