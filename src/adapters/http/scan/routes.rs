//! Route configuration for image analysis.

use axum::{routing::post, Router};

use crate::adapters::http::ScreeningAppState;

use super::handlers::{analyze_image, scan_for_session};

/// Creates the scan router. Paths are relative to `/api`.
pub fn scan_router() -> Router<ScreeningAppState> {
    Router::new()
        .route("/analyze-image", post(analyze_image))
        .route("/triage/:id/scan", post(scan_for_session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::image::MockImageClassifier;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::imaging::IMAGE_DISCLAIMER;
    use crate::ports::ImageSourceError;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(classifier: MockImageClassifier) -> Router {
        let state = ScreeningAppState::new(Arc::new(InMemorySessionStore::new()), Arc::new(classifier));
        scan_router().with_state(state)
    }

    async fn post_image(app: Router, body: Body) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analyze-image")
                    .header("content-type", "image/jpeg")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn empty_body_returns_mock_candidates() {
        let (status, body) = post_image(app(MockImageClassifier::new()), Body::empty()).await;

        assert_eq!(status, StatusCode::OK);
        let candidates = body["candidates"].as_array().unwrap();
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0]["label"], "Dermatitis / Eczema-like");
        assert_eq!(body["disclaimer"], IMAGE_DISCLAIMER);
    }

    #[tokio::test]
    async fn image_bytes_reach_the_classifier() {
        let classifier = MockImageClassifier::new();
        let (status, _) = post_image(app(classifier.clone()), Body::from(vec![0xFF, 0xD8])).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(classifier.call_count(), 1);
    }

    #[tokio::test]
    async fn session_scan_with_malformed_id_is_400() {
        let response = app(MockImageClassifier::new())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/triage/not-a-uuid/scan")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn session_scan_for_unknown_session_is_404() {
        let classifier = MockImageClassifier::new();
        let uri = format!("/triage/{}/scan", crate::domain::foundation::SessionId::new());
        let response = app(classifier.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(classifier.call_count(), 0);
    }

    #[tokio::test]
    async fn classifier_failure_is_502() {
        let classifier =
            MockImageClassifier::new().with_failure(ImageSourceError::Unavailable("offline".into()));

        let (status, body) = post_image(app(classifier), Body::empty()).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "IMAGE_SOURCE_ERROR");
    }
}
