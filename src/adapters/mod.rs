//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `image` - Image classifier implementations (mock)
//! - `storage` - Session stores (in-memory, YAML files)

pub mod http;
pub mod image;
pub mod storage;

pub use http::{api_router, ScreeningAppState};
pub use image::MockImageClassifier;
pub use storage::{FileSessionStore, InMemorySessionStore};
