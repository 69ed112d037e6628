//! HTTP adapter for photo classification.
//!
//! - `POST /api/analyze-image` - Ranked candidate categories with disclaimer
//! - `POST /api/triage/:id/scan` - Same, with the candidates kept on the session

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::scan_router;
