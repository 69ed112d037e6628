//! ConverseHandler - copilot turn bound to a finished session.
//!
//! The tier comes from the stored assessment, so the client cannot ask about
//! a tier it was never given. Both sides of the exchange are appended to the
//! session transcript under the session's lock. The simulated delay runs
//! before the lock is taken.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::SessionId;
use crate::domain::guidance::{GuidanceMessage, GuidanceTemplater};
use crate::ports::TriageSessionStore;

use super::super::{ScreeningError, SessionLocks};

#[derive(Debug, Clone)]
pub struct ConverseCommand {
    pub session_id: SessionId,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ConverseResult {
    pub reply: GuidanceMessage,
    pub turns: usize,
}

pub struct ConverseHandler {
    store: Arc<dyn TriageSessionStore>,
    locks: SessionLocks,
    delay: Duration,
}

impl ConverseHandler {
    pub fn new(store: Arc<dyn TriageSessionStore>, locks: SessionLocks) -> Self {
        Self {
            store,
            locks,
            delay: Duration::ZERO,
        }
    }

    /// Sets simulated thinking time before replying.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn handle(&self, cmd: ConverseCommand) -> Result<ConverseResult, ScreeningError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let _guard = self.locks.acquire(cmd.session_id).await;
        let mut record = self.store.load(cmd.session_id).await?;

        let tier = match record.session.assessment() {
            Some(assessment) => assessment.tier(),
            None => {
                tracing::warn!(session_id = %cmd.session_id, "Copilot asked before triage finished");
                let (answered, total) = record.session.progress();
                return Err(ScreeningError::Incomplete { answered, total });
            }
        };

        let question = record.transcript.push_user(&cmd.message)?.text.clone();
        let reply = GuidanceTemplater::respond(tier, Some(&question));
        record.transcript.push_assistant(reply.to_markdown());
        record.touch();
        self.store.save(&record).await.map_err(|e| {
            tracing::error!(session_id = %cmd.session_id, error = %e, "Failed to save transcript");
            ScreeningError::from(e)
        })?;

        tracing::debug!(
            session_id = %cmd.session_id,
            risk = %tier,
            turns = record.transcript.len(),
            "Copilot turn recorded"
        );

        Ok(ConverseResult {
            reply,
            turns: record.transcript.len(),
        })
    }
}
