//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ImageCategorySource` - Photo classifier (mocked in this service)
//! - `TriageSessionStore` - Persistence of triage sessions and transcripts

mod image_category_source;
mod session_store;

pub use image_category_source::{ImageCategorySource, ImageSourceError};
pub use session_store::{SessionRecord, SessionStoreError, TriageSessionStore};
