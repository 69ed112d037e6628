//! HTTP adapter for the guided questionnaire.
//!
//! - `GET /api/questions` - Question catalog
//! - `POST /api/triage` - Start a session
//! - `GET /api/triage/:id` - Current state
//! - `POST /api/triage/:id/answers` - Answer the current question
//! - `GET /api/triage/:id/result` - Assessment and next steps
//! - `GET /api/triage/:id/snapshot` - Key-value snapshot
//! - `POST /api/triage/:id/copilot` - Session-scoped copilot turn
//! - `GET /api/triage/:id/transcript` - Copilot history

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::triage_router;
