//! StartTriageHandler - Command handler for opening a screening session.

use std::sync::Arc;

use crate::domain::triage::TriageSession;
use crate::ports::{SessionRecord, TriageSessionStore};

use super::super::ScreeningError;

/// Handler for starting triage sessions.
pub struct StartTriageHandler {
    store: Arc<dyn TriageSessionStore>,
}

impl StartTriageHandler {
    pub fn new(store: Arc<dyn TriageSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<SessionRecord, ScreeningError> {
        let record = SessionRecord::new(TriageSession::new());

        self.store.save(&record).await.map_err(|e| {
            tracing::error!(session_id = %record.id, error = %e, "Failed to save new session");
            ScreeningError::from(e)
        })?;

        tracing::info!(
            session_id = %record.id,
            questions = record.session.total_questions(),
            "Triage session started"
        );

        Ok(record)
    }
}
