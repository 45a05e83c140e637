use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use super::{
    append_to_archive, decode_archive, decode_session, PersistenceError, PersistenceGateway,
    ARCHIVE_KEY,
};
use crate::game::GameSession;

/// JSON-file implementation of PersistenceGateway
///
/// Each key is stored as `<dir>/<key>.json`. Writes go to a temporary file
/// that is renamed into place, so a reader sees either the old or the new
/// document.
pub struct FileStore {
    dir: PathBuf,
    // Serializes read-modify-write of the archive list
    archive_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            archive_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    async fn read_blob(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key, "No file stored for key");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write_blob(&self, key: &str, blob: String) -> Result<(), PersistenceError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{}.json.tmp", key));
        tokio::fs::write(&tmp, blob).await?;
        tokio::fs::rename(&tmp, &path).await?;

        debug!(path = %path.display(), "Blob written");
        Ok(())
    }
}

#[async_trait]
impl PersistenceGateway for FileStore {
    #[instrument(skip(self))]
    async fn load(&self, key: &str) -> Result<Option<GameSession>, PersistenceError> {
        match self.read_blob(key).await? {
            Some(blob) => decode_session(&blob).map(Some),
            None => Ok(None),
        }
    }

    #[instrument(skip(self, session), fields(session_id = %session.id()))]
    async fn save(&self, key: &str, session: &GameSession) -> Result<(), PersistenceError> {
        let blob = serde_json::to_string_pretty(session)?;
        self.write_blob(key, blob).await
    }

    #[instrument(skip(self, session), fields(session_id = %session.id()))]
    async fn append_archive(&self, session: &GameSession) -> Result<(), PersistenceError> {
        let _guard = self.archive_lock.lock().await;
        let existing = self.read_blob(ARCHIVE_KEY).await?;
        let blob = append_to_archive(existing.as_deref(), session)?;
        self.write_blob(ARCHIVE_KEY, blob).await
    }

    async fn load_archive(&self) -> Result<Vec<GameSession>, PersistenceError> {
        let existing = self.read_blob(ARCHIVE_KEY).await?;
        decode_archive(existing.as_deref())
    }
}
