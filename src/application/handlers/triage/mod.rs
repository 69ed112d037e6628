//! Triage handlers - start a session, answer questions, read results.

mod get_result;
mod get_snapshot;
mod get_triage;
mod start_triage;
mod submit_answer;

pub use get_result::{GetResultHandler, GetResultQuery, TriageResultView};
pub use get_snapshot::{GetSnapshotHandler, GetSnapshotQuery};
pub use get_triage::{GetTriageHandler, GetTriageQuery};
pub use start_triage::StartTriageHandler;
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};
