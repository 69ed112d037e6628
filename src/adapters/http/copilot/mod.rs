//! HTTP adapter for the stateless copilot.
//!
//! - `POST /api/copilot` - `{message, risk}` to sectioned guidance

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::copilot_router;
