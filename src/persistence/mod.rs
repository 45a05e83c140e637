// Storage for the current session and the archive of finished sessions
//
// The game treats storage as a key-value blob store: each key holds one
// JSON document. Implementations only differ in where the blobs live.

pub use file::FileStore;
pub use memory::InMemoryStore;
pub use remote::{forward_in_background, HttpRemoteArchive, RemoteArchive};

mod file;
mod memory;
mod remote;

use async_trait::async_trait;
use thiserror::Error;

use crate::game::GameSession;

/// Key of the session currently being played
pub const CURRENT_SESSION_KEY: &str = "game";
/// Key of the list of archived sessions
pub const ARCHIVE_KEY: &str = "archivedGames";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Remote archive error: {0}")]
    Remote(String),
}

/// Trait for session storage operations
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<GameSession>, PersistenceError>;
    async fn save(&self, key: &str, session: &GameSession) -> Result<(), PersistenceError>;

    /// Appends a copy of `session` to the archive list
    async fn append_archive(&self, session: &GameSession) -> Result<(), PersistenceError>;
    async fn load_archive(&self) -> Result<Vec<GameSession>, PersistenceError>;
}

fn decode_session(blob: &str) -> Result<GameSession, PersistenceError> {
    Ok(serde_json::from_str(blob)?)
}

fn decode_archive(blob: Option<&str>) -> Result<Vec<GameSession>, PersistenceError> {
    match blob {
        Some(blob) => Ok(serde_json::from_str(blob)?),
        None => Ok(Vec::new()),
    }
}

/// Re-encodes the archive blob with `session` appended
fn append_to_archive(
    existing: Option<&str>,
    session: &GameSession,
) -> Result<String, PersistenceError> {
    let mut archive = decode_archive(existing)?;
    archive.push(session.clone());
    Ok(serde_json::to_string(&archive)?)
}
