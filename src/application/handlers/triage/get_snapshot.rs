//! GetSnapshotHandler - Query handler for the key-value form of a session.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::triage::TriageSnapshot;
use crate::ports::TriageSessionStore;

use super::super::ScreeningError;

#[derive(Debug, Clone, Copy)]
pub struct GetSnapshotQuery {
    pub session_id: SessionId,
}

pub struct GetSnapshotHandler {
    store: Arc<dyn TriageSessionStore>,
}

impl GetSnapshotHandler {
    pub fn new(store: Arc<dyn TriageSessionStore>) -> Self {
        Self { store }
    }

    /// Returns the `derma_ai_result`, `derma_ai_answers` and
    /// `derma_ai_image_candidates` entries.
    ///
    /// The result entry is absent while the session is unscored, the
    /// candidates entry until a photo is scanned for the session.
    pub async fn handle(
        &self,
        query: GetSnapshotQuery,
    ) -> Result<BTreeMap<String, String>, ScreeningError> {
        let record = self.store.load(query.session_id).await?;
        let snapshot = TriageSnapshot::from_session(&record.session)
            .with_image_candidates(record.image_candidates);
        Ok(snapshot.to_entries()?)
    }
}
