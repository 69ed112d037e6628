//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over the
//! session store and the image classifier.

pub mod guidance;
pub mod imaging;
pub mod triage;

mod screening_error;
mod session_locks;

pub use screening_error::ScreeningError;
pub use session_locks::SessionLocks;
