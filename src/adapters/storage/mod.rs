//! Storage Adapters
//!
//! Implementations of the `TriageSessionStore` port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Process-local map (default)
//! - **FileSessionStore** - One YAML file per session on disk
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSessionStore, InMemorySessionStore};
//!
//! let store = FileSessionStore::new("./data/sessions");
//! let store = InMemorySessionStore::new();
//! ```

mod file_session_store;
mod in_memory_session_store;

pub use file_session_store::FileSessionStore;
pub use in_memory_session_store::InMemorySessionStore;
