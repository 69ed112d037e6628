//! HTTP adapters - REST API for the screening service.
//!
//! Each endpoint group has its own module with `dto`, `handlers` and
//! `routes`. [`api_router`] mounts them all under `/api` and adds the
//! transport layers (tracing, CORS, request timeout).

pub mod copilot;
pub mod error;
pub mod health;
pub mod scan;
pub mod state;
pub mod triage;

use std::time::Duration;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use copilot::copilot_router;
pub use error::ErrorResponse;
pub use scan::scan_router;
pub use state::ScreeningAppState;
pub use triage::triage_router;

/// Routes under `/api`, without transport layers.
pub fn api_routes() -> Router<ScreeningAppState> {
    Router::new()
        .route("/health", get(health::health))
        .merge(triage_router())
        .merge(copilot_router())
        .merge(scan_router())
}

/// The complete application router.
pub fn api_router(state: ScreeningAppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
