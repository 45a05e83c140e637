use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use super::PersistenceError;
use crate::game::GameSession;

/// Off-site copy of archived sessions
#[async_trait]
pub trait RemoteArchive: Send + Sync {
    async fn forward(&self, session: &GameSession) -> Result<(), PersistenceError>;
}

/// Posts the serialized session as a JSON body to a fixed URL
pub struct HttpRemoteArchive {
    client: reqwest::Client,
    url: String,
}

impl HttpRemoteArchive {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl RemoteArchive for HttpRemoteArchive {
    #[instrument(skip(self, session), fields(url = %self.url, session_id = %session.id()))]
    async fn forward(&self, session: &GameSession) -> Result<(), PersistenceError> {
        self.client
            .post(&self.url)
            .json(session)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| PersistenceError::Remote(e.to_string()))?;
        Ok(())
    }
}

/// Forwards a session without waiting for the outcome. Failures are logged
/// and never retried.
pub fn forward_in_background(remote: Arc<dyn RemoteArchive>, session: GameSession) -> JoinHandle<()> {
    tokio::spawn(async move {
        match remote.forward(&session).await {
            Ok(()) => info!(session_id = %session.id(), "Session forwarded to remote archive"),
            Err(e) => warn!(
                session_id = %session.id(),
                error = %e,
                "Remote archive failed, session kept in local archive only"
            ),
        }
    })
}
