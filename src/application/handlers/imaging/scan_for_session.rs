//! ScanForSessionHandler - classifies a photo and keeps the candidates on a session.
//!
//! The classifier runs before the session lock is taken; only the write of
//! the candidates is serialized with other commands on the session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::imaging::{ImageClassification, ImageUpload};
use crate::ports::{ImageCategorySource, TriageSessionStore};

use super::super::{ScreeningError, SessionLocks};

#[derive(Debug, Clone)]
pub struct ScanForSessionCommand {
    pub session_id: SessionId,
    pub upload: ImageUpload,
}

pub struct ScanForSessionHandler {
    source: Arc<dyn ImageCategorySource>,
    store: Arc<dyn TriageSessionStore>,
    locks: SessionLocks,
}

impl ScanForSessionHandler {
    pub fn new(
        source: Arc<dyn ImageCategorySource>,
        store: Arc<dyn TriageSessionStore>,
        locks: SessionLocks,
    ) -> Self {
        Self {
            source,
            store,
            locks,
        }
    }

    /// Replaces any earlier scan stored for the session.
    pub async fn handle(
        &self,
        cmd: ScanForSessionCommand,
    ) -> Result<ImageClassification, ScreeningError> {
        if !self.store.exists(cmd.session_id).await? {
            return Err(ScreeningError::NotFound(cmd.session_id));
        }

        let classification = self.source.classify(&cmd.upload).await.map_err(|e| {
            tracing::error!(
                session_id = %cmd.session_id,
                error = %e,
                bytes = cmd.upload.byte_len(),
                "Image classification failed"
            );
            ScreeningError::from(e)
        })?;

        let _guard = self.locks.acquire(cmd.session_id).await;
        let mut record = self.store.load(cmd.session_id).await?;
        record.image_candidates = Some(classification.candidates.clone());
        record.touch();
        self.store.save(&record).await.map_err(|e| {
            tracing::error!(session_id = %cmd.session_id, error = %e, "Failed to save scan");
            ScreeningError::from(e)
        })?;

        tracing::info!(
            session_id = %cmd.session_id,
            candidates = classification.candidates.len(),
            "Scan attached to session"
        );

        Ok(classification)
    }
}
