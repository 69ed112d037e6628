//! Guidance handlers - copilot replies and transcript history.

mod ask_copilot;
mod converse;
mod get_transcript;

pub use ask_copilot::{AskCopilotCommand, AskCopilotHandler};
pub use converse::{ConverseCommand, ConverseHandler, ConverseResult};
pub use get_transcript::{GetTranscriptHandler, GetTranscriptQuery};
