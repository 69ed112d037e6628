//! GetTriageHandler - Query handler for a session's current state.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::ports::{SessionRecord, TriageSessionStore};

use super::super::ScreeningError;

/// Query for a session by id.
#[derive(Debug, Clone, Copy)]
pub struct GetTriageQuery {
    pub session_id: SessionId,
}

pub struct GetTriageHandler {
    store: Arc<dyn TriageSessionStore>,
}

impl GetTriageHandler {
    pub fn new(store: Arc<dyn TriageSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetTriageQuery) -> Result<SessionRecord, ScreeningError> {
        Ok(self.store.load(query.session_id).await?)
    }
}
