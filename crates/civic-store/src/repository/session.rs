//! JSON-file implementation of [`SessionStore`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use civic_core::error::CivicResult;
use civic_core::models::session::SessionUser;
use civic_core::repository::SessionStore;
use tracing::debug;

use crate::error::StoreError;

/// Persists the signed-in user as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Option<SessionUser>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn write(&self, user: &SessionUser) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec(user)?;
        // The record is replaced atomically.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn remove(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionStore for FileSessionStore {
    async fn get(&self) -> CivicResult<Option<SessionUser>> {
        Ok(self.read().await?)
    }

    async fn set(&self, user: &SessionUser) -> CivicResult<()> {
        self.write(user).await?;
        debug!(path = %self.path.display(), user_id = user.id, "session persisted");
        Ok(())
    }

    async fn clear(&self) -> CivicResult<()> {
        self.remove().await?;
        debug!(path = %self.path.display(), "session cleared");
        Ok(())
    }
}
