//! Guidance module - advice layered on top of a known risk tier.
//!
//! - `GuidanceTemplater` - Pure four-section copilot reply
//! - `next_steps` - Results-panel action list (distinct wording)
//! - `Transcript` - Append-only conversation history of a session

mod errors;
mod next_steps;
mod templater;
mod transcript;

pub use errors::GuidanceError;
pub use next_steps::{next_steps, NEXT_STEPS_HIGH, NEXT_STEPS_LOW, NEXT_STEPS_MEDIUM};
pub use templater::{
    GuidanceMessage, GuidanceTemplater, COPILOT_TODO_HIGH, COPILOT_TODO_LOW, COPILOT_TODO_MEDIUM,
};
pub use transcript::{GuidanceTurn, Role, Transcript};
