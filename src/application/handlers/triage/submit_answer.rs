//! SubmitAnswerHandler - Command handler for answering the current question.
//!
//! Each submission is a load, transition, save cycle on one record, run under
//! the session's lock. Rejected submissions never reach the store.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::triage::TriageProgress;
use crate::ports::{SessionRecord, TriageSessionStore};

use super::super::{ScreeningError, SessionLocks};

/// Command to answer the session's current question.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub session_id: SessionId,
    pub option: String,
}

/// Result of an accepted answer.
#[derive(Debug, Clone)]
pub struct SubmitAnswerResult {
    pub record: SessionRecord,
    pub progress: TriageProgress,
}

/// Handler for answer submissions.
pub struct SubmitAnswerHandler {
    store: Arc<dyn TriageSessionStore>,
    locks: SessionLocks,
}

impl SubmitAnswerHandler {
    pub fn new(store: Arc<dyn TriageSessionStore>, locks: SessionLocks) -> Self {
        Self { store, locks }
    }

    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> Result<SubmitAnswerResult, ScreeningError> {
        let _guard = self.locks.acquire(cmd.session_id).await;
        let mut record = self.store.load(cmd.session_id).await?;
        let question_id = record.session.current_question().map(|q| q.id);

        let progress = record.session.submit_answer(&cmd.option).map_err(|e| {
            tracing::warn!(session_id = %cmd.session_id, error = %e, "Answer rejected");
            ScreeningError::from(e)
        })?;

        record.touch();
        self.store.save(&record).await.map_err(|e| {
            tracing::error!(session_id = %cmd.session_id, error = %e, "Failed to save answer");
            ScreeningError::from(e)
        })?;

        tracing::debug!(
            session_id = %cmd.session_id,
            question_id = question_id.unwrap_or_default(),
            option = %cmd.option,
            "Answer recorded"
        );

        if let TriageProgress::Completed(assessment) = &progress {
            tracing::info!(
                session_id = %cmd.session_id,
                score = assessment.score(),
                risk = %assessment.tier(),
                "Triage completed"
            );
        }

        Ok(SubmitAnswerResult { record, progress })
    }
}
