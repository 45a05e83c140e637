use async_trait::async_trait;
use thiserror::Error;

use super::events::SessionEvent;

#[derive(Debug, Error)]
pub enum EventHandlerError {
    #[error("Handler error: {0}")]
    HandlerError(String),
}

/// Observer of session events
///
/// Handlers react to changes that already happened; a failing handler is
/// logged and never affects the session.
#[async_trait]
pub trait SessionEventHandler: Send + Sync {
    async fn handle_event(&self, event: SessionEvent) -> Result<(), EventHandlerError>;

    /// Get a human-readable name for this handler (for logging/debugging)
    fn handler_name(&self) -> &'static str;
}
