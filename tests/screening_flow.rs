//! End-to-end screening flow over the HTTP API.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use derma_triage::adapters::{
    api_router, FileSessionStore, InMemorySessionStore, MockImageClassifier, ScreeningAppState,
};
use derma_triage::config::ServerConfig;
use derma_triage::domain::triage::TriageSnapshot;
use derma_triage::ports::TriageSessionStore;

fn app_with(store: Arc<dyn TriageSessionStore>) -> Router {
    let state = ScreeningAppState::new(store, Arc::new(MockImageClassifier::new()));
    api_router(state, &ServerConfig::default())
}

fn app() -> Router {
    app_with(Arc::new(InMemorySessionStore::new()))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn run_triage(app: &Router, options: &[&str]) -> String {
    let (status, body) = call(app, "POST", "/api/triage", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["session_id"].as_str().unwrap().to_string();

    for option in options {
        let (status, _) = call(
            app,
            "POST",
            &format!("/api/triage/{}/answers", id),
            Some(json!({ "option": option })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    id
}

#[tokio::test]
async fn full_high_risk_session() {
    let app = app();

    let (status, scan) = call(&app, "POST", "/api/analyze-image", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(scan["candidates"][0]["label"], "Dermatitis / Eczema-like");

    let id = run_triage(&app, &["Yes", "More than 2 weeks", "Yes", "Yes"]).await;

    let (status, state) = call(&app, "GET", &format!("/api/triage/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state["status"], "complete");
    assert_eq!(state["answered"], 4);

    let (status, result) = call(&app, "GET", &format!("/api/triage/{}/result", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["score"], 10);
    assert_eq!(result["risk"], "High");
    assert_eq!(
        result["insight"],
        "Your risk is high due to prolonged duration and concerning symptoms like pain or spread."
    );
    assert_eq!(
        result["next_steps"][0],
        "Seek medical assessment soon (same day / within 24 hours if possible)."
    );

    let (status, reply) = call(
        &app,
        "POST",
        &format!("/api/triage/{}/copilot", id),
        Some(json!({ "message": "Is this urgent?" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        reply["sections"]["detected"],
        "Based on your screening flow, your current risk level is: High."
    );
    assert_eq!(reply["echo"], "You asked: \"Is this urgent?\"");
    assert_eq!(reply["turns"], 2);

    let (status, transcript) =
        call(&app, "GET", &format!("/api/triage/{}/transcript", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(transcript["turns"][0]["role"], "user");
    assert_eq!(transcript["turns"][1]["role"], "assistant");
}

#[tokio::test]
async fn medium_and_low_sessions_score_as_expected() {
    let app = app();

    let medium = run_triage(&app, &["Yes", "1 week", "Yes", "No"]).await;
    let (_, result) = call(&app, "GET", &format!("/api/triage/{}/result", medium), None).await;
    assert_eq!(result["score"], 4);
    assert_eq!(result["risk"], "Medium");

    let low = run_triage(&app, &["No", "< 3 days", "No", "No"]).await;
    let (_, result) = call(&app, "GET", &format!("/api/triage/{}/result", low), None).await;
    assert_eq!(result["score"], 0);
    assert_eq!(result["risk"], "Low");
}

#[tokio::test]
async fn answering_after_completion_is_rejected_without_rescoring() {
    let app = app();
    let id = run_triage(&app, &["No", "< 3 days", "No", "No"]).await;

    let (status, body) = call(
        &app,
        "POST",
        &format!("/api/triage/{}/answers", id),
        Some(json!({ "option": "Yes" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "TRIAGE_ALREADY_COMPLETE");

    let (_, result) = call(&app, "GET", &format!("/api/triage/{}/result", id), None).await;
    assert_eq!(result["score"], 0);
    assert_eq!(result["risk"], "Low");
}

#[tokio::test]
async fn copilot_before_completion_is_rejected() {
    let app = app();
    let id = run_triage(&app, &["Yes"]).await;

    let (status, body) = call(
        &app,
        "POST",
        &format!("/api/triage/{}/copilot", id),
        Some(json!({ "message": "Hello" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "TRIAGE_INCOMPLETE");
}

#[tokio::test]
async fn snapshot_entries_decode_to_the_session_result() {
    let app = app();
    let id = run_triage(&app, &["No", "More than 2 weeks", "No", "Yes"]).await;

    let (status, body) = call(&app, "GET", &format!("/api/triage/{}/snapshot", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let entries = serde_json::from_value(body).unwrap();
    let snapshot = TriageSnapshot::from_entries(&entries).unwrap();
    let result = snapshot.result.unwrap();
    assert_eq!(result.score(), 6);
    assert_eq!(result.tier().label(), "High");
    assert_eq!(snapshot.answers.get("pain"), Some("Yes"));
}

#[tokio::test]
async fn stateless_copilot_rejects_unknown_tier() {
    let app = app();

    let (status, body) = call(
        &app,
        "POST",
        "/api/copilot",
        Some(json!({ "message": "hi", "risk": "Unknown" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_RISK_TIER");
}

#[tokio::test]
async fn file_store_sessions_survive_a_new_router() {
    let temp_dir = TempDir::new().unwrap();
    let first = app_with(Arc::new(FileSessionStore::new(temp_dir.path())));
    let id = run_triage(&first, &["Yes", "1 week"]).await;

    let second = app_with(Arc::new(FileSessionStore::new(temp_dir.path())));
    let (status, state) = call(&second, "GET", &format!("/api/triage/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(state["answered"], 2);
    assert_eq!(state["current_question"]["id"], "spread");
}

#[tokio::test]
async fn racing_final_answers_score_the_session_once() {
    let temp_dir = TempDir::new().unwrap();
    let app = app_with(Arc::new(FileSessionStore::new(temp_dir.path())));
    let id = run_triage(&app, &["Yes", "1 week", "Yes"]).await;
    let uri = format!("/api/triage/{}/answers", id);

    let (first, second) = tokio::join!(
        call(&app, "POST", &uri, Some(json!({ "option": "Yes" }))),
        call(&app, "POST", &uri, Some(json!({ "option": "No" }))),
    );

    let (winner, loser) = if first.0 == StatusCode::OK {
        (first, second)
    } else {
        (second, first)
    };
    assert_eq!(winner.0, StatusCode::OK);
    assert_eq!(loser.0, StatusCode::CONFLICT);
    assert_eq!(loser.1["code"], "TRIAGE_ALREADY_COMPLETE");

    let (status, result) = call(&app, "GET", &format!("/api/triage/{}/result", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["score"], winner.1["result"]["score"]);
    assert_eq!(result["risk"], winner.1["result"]["risk"]);
}

#[tokio::test]
async fn racing_copilot_turns_keep_the_whole_transcript() {
    let temp_dir = TempDir::new().unwrap();
    let state = ScreeningAppState::new(
        Arc::new(FileSessionStore::new(temp_dir.path())),
        Arc::new(MockImageClassifier::new()),
    )
    .with_copilot_delay(std::time::Duration::from_millis(20));
    let app = api_router(state, &ServerConfig::default());
    let id = run_triage(&app, &["No", "< 3 days", "No", "No"]).await;
    let uri = format!("/api/triage/{}/copilot", id);

    let (first, second) = tokio::join!(
        call(&app, "POST", &uri, Some(json!({ "message": "First" }))),
        call(&app, "POST", &uri, Some(json!({ "message": "Second" }))),
    );
    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(second.0, StatusCode::OK);

    let (status, transcript) =
        call(&app, "GET", &format!("/api/triage/{}/transcript", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(transcript["turns"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn session_scan_is_kept_in_the_snapshot() {
    let app = app();
    let id = run_triage(&app, &["Yes"]).await;

    let (status, scan) = call(&app, "POST", &format!("/api/triage/{}/scan", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(scan["candidates"].as_array().unwrap().len(), 3);

    let (status, body) = call(&app, "GET", &format!("/api/triage/{}/snapshot", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = serde_json::from_value(body).unwrap();
    let snapshot = TriageSnapshot::from_entries(&entries).unwrap();
    let candidates = snapshot.image_candidates.unwrap();
    assert_eq!(candidates[0].label, "Dermatitis / Eczema-like");
    assert!(snapshot.result.is_none());
}
