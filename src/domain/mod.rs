//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `triage` - Question catalog, risk engine and the triage state machine
//! - `guidance` - Copilot templating, next-steps panel and conversation transcript
//! - `imaging` - Value types for the pluggable image classifier

pub mod foundation;
pub mod guidance;
pub mod imaging;
pub mod triage;
