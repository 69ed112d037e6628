//! GetTranscriptHandler - Query handler for a session's copilot history.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::guidance::Transcript;
use crate::ports::TriageSessionStore;

use super::super::ScreeningError;

#[derive(Debug, Clone, Copy)]
pub struct GetTranscriptQuery {
    pub session_id: SessionId,
}

pub struct GetTranscriptHandler {
    store: Arc<dyn TriageSessionStore>,
}

impl GetTranscriptHandler {
    pub fn new(store: Arc<dyn TriageSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetTranscriptQuery) -> Result<Transcript, ScreeningError> {
        Ok(self.store.load(query.session_id).await?.transcript)
    }
}
