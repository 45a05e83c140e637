use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::{
    append_to_archive, decode_archive, decode_session, PersistenceError, PersistenceGateway,
    ARCHIVE_KEY,
};
use crate::game::GameSession;

/// In-memory implementation of PersistenceGateway for development and testing
///
/// Sessions are stored serialized, exactly as the file store would write
/// them, and are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with a raw blob already present under `key`
    pub fn with_blob(key: &str, blob: impl Into<String>) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.to_string(), blob.into());
        Self {
            blobs: RwLock::new(blobs),
        }
    }

    /// Raw blob stored under `key`, if any
    pub async fn blob(&self, key: &str) -> Option<String> {
        self.blobs.read().await.get(key).cloned()
    }
}

#[async_trait]
impl PersistenceGateway for InMemoryStore {
    #[instrument(skip(self))]
    async fn load(&self, key: &str) -> Result<Option<GameSession>, PersistenceError> {
        let blobs = self.blobs.read().await;
        match blobs.get(key) {
            Some(blob) => decode_session(blob).map(Some),
            None => {
                debug!(key, "No session stored in memory");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, session), fields(session_id = %session.id()))]
    async fn save(&self, key: &str, session: &GameSession) -> Result<(), PersistenceError> {
        let blob = serde_json::to_string(session)?;
        self.blobs.write().await.insert(key.to_string(), blob);
        Ok(())
    }

    #[instrument(skip(self, session), fields(session_id = %session.id()))]
    async fn append_archive(&self, session: &GameSession) -> Result<(), PersistenceError> {
        let mut blobs = self.blobs.write().await;
        let blob = append_to_archive(blobs.get(ARCHIVE_KEY).map(String::as_str), session)?;
        blobs.insert(ARCHIVE_KEY.to_string(), blob);
        Ok(())
    }

    async fn load_archive(&self) -> Result<Vec<GameSession>, PersistenceError> {
        let blobs = self.blobs.read().await;
        decode_archive(blobs.get(ARCHIVE_KEY).map(String::as_str))
    }
}
