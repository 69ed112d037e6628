//! File-based Session Store Adapter
//!
//! Stores each session record as `<base>/<session_id>.yaml`. Intended for
//! development, where inspecting a session on disk is handy.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::SessionId;
use crate::ports::{SessionRecord, SessionStoreError, TriageSessionStore};

/// File-based storage for session records
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_path: PathBuf,
}

impl FileSessionStore {
    /// Create a store rooted at `base_path`
    ///
    /// The directory is created lazily on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn record_path(&self, id: SessionId) -> PathBuf {
        self.base_path.join(format!("{}.yaml", id))
    }
}

#[async_trait]
impl TriageSessionStore for FileSessionStore {
    async fn save(&self, record: &SessionRecord) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        let yaml = serde_yaml::to_string(record)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;

        // Readers never see a half-written record.
        let path = self.record_path(record.id);
        let staging = path.with_extension("yaml.tmp");
        fs::write(&staging, yaml)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;
        fs::rename(&staging, &path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))
    }

    async fn load(&self, id: SessionId) -> Result<SessionRecord, SessionStoreError> {
        let path = self.record_path(id);

        let yaml = match fs::read_to_string(&path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SessionStoreError::NotFound(id))
            }
            Err(e) => return Err(SessionStoreError::IoError(e.to_string())),
        };

        serde_yaml::from_str(&yaml)
            .map_err(|e| SessionStoreError::DeserializationFailed(e.to_string()))
    }

    async fn exists(&self, id: SessionId) -> Result<bool, SessionStoreError> {
        fs::try_exists(self.record_path(id))
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))
    }

    async fn delete(&self, id: SessionId) -> Result<(), SessionStoreError> {
        match fs::remove_file(self.record_path(id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::IoError(e.to_string())),
        }
    }
}
