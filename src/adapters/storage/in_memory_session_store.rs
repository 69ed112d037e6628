//! In-Memory Session Store Adapter
//!
//! Keeps session records in a process-local map. Records vanish on restart,
//! which is the default lifetime for a screening session.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::ports::{SessionRecord, SessionStoreError, TriageSessionStore};

/// In-memory storage for session records
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    records: Arc<RwLock<HashMap<SessionId, SessionRecord>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl TriageSessionStore for InMemorySessionStore {
    async fn save(&self, record: &SessionRecord) -> Result<(), SessionStoreError> {
        self.records.write().await.insert(record.id, record.clone());
        Ok(())
    }

    async fn load(&self, id: SessionId) -> Result<SessionRecord, SessionStoreError> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(id))
    }

    async fn exists(&self, id: SessionId) -> Result<bool, SessionStoreError> {
        Ok(self.records.read().await.contains_key(&id))
    }

    async fn delete(&self, id: SessionId) -> Result<(), SessionStoreError> {
        self.records.write().await.remove(&id);
        Ok(())
    }
}
