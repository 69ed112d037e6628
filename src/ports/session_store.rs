//! Session Store Port - persistence boundary for triage sessions.
//!
//! Sessions are plain domain objects; serialization happens only inside
//! the adapters that implement this port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::guidance::Transcript;
use crate::domain::imaging::ImageCandidate;
use crate::domain::triage::TriageSession;

/// Errors that can occur during session storage operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Everything persisted for one screening flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: SessionId,
    pub session: TriageSession,
    #[serde(default)]
    pub transcript: Transcript,
    /// Candidates from the latest photo scanned for this session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_candidates: Option<Vec<ImageCandidate>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SessionRecord {
    /// Wraps a fresh session under a new id.
    pub fn new(session: TriageSession) -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            session,
            transcript: Transcript::new(),
            image_candidates: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the record as modified.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

/// Port for persisting and loading session records
#[async_trait]
pub trait TriageSessionStore: Send + Sync {
    /// Insert or replace a record
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the write fails
    async fn save(&self, record: &SessionRecord) -> Result<(), SessionStoreError>;

    /// Load a record by id
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no record exists
    async fn load(&self, id: SessionId) -> Result<SessionRecord, SessionStoreError>;

    /// Check whether a record exists
    async fn exists(&self, id: SessionId) -> Result<bool, SessionStoreError>;

    /// Remove a record; removing a missing record is not an error
    async fn delete(&self, id: SessionId) -> Result<(), SessionStoreError>;
}
