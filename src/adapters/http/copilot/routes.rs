//! Route configuration for the copilot endpoint.

use axum::{routing::post, Router};

use crate::adapters::http::ScreeningAppState;

use super::handlers::ask_copilot;

/// Creates the copilot router. Paths are relative to `/api`.
pub fn copilot_router() -> Router<ScreeningAppState> {
    Router::new().route("/copilot", post(ask_copilot))
}
