//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands mutate a stored session; queries only read it.

pub mod handlers;

pub use handlers::guidance::{
    AskCopilotCommand, AskCopilotHandler, ConverseCommand, ConverseHandler, ConverseResult,
    GetTranscriptHandler, GetTranscriptQuery,
};
pub use handlers::imaging::{AnalyzeImageHandler, ScanForSessionCommand, ScanForSessionHandler};
pub use handlers::triage::{
    GetResultHandler, GetResultQuery, GetSnapshotHandler, GetSnapshotQuery, GetTriageHandler,
    GetTriageQuery, StartTriageHandler, SubmitAnswerCommand, SubmitAnswerHandler,
    SubmitAnswerResult, TriageResultView,
};
pub use handlers::{ScreeningError, SessionLocks};
