use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use super::events::SessionEvent;
use super::handler::{EventHandlerError, SessionEventHandler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Warning,
    Celebration,
}

/// Short-lived message for the table. Losing one never affects state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub duration_ms: u64,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind, duration_ms: u64) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_ms,
        }
    }
}

/// How long each kind of notice stays on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeDurations {
    pub info_ms: u64,
    pub warning_ms: u64,
    pub celebration_ms: u64,
}

impl Default for NoticeDurations {
    fn default() -> Self {
        Self {
            info_ms: 3000,
            warning_ms: 5000,
            celebration_ms: 8000,
        }
    }
}

impl NoticeDurations {
    pub fn for_kind(&self, kind: NoticeKind) -> u64 {
        match kind {
            NoticeKind::Info => self.info_ms,
            NoticeKind::Warning => self.warning_ms,
            NoticeKind::Celebration => self.celebration_ms,
        }
    }
}

/// Displays notices. Implementations decide how; the game decides what.
pub trait NotificationEmitter: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Emitter that writes notices to the log
pub struct TracingEmitter;

impl NotificationEmitter for TracingEmitter {
    fn notify(&self, notice: &Notice) {
        info!(
            kind = ?notice.kind,
            duration_ms = notice.duration_ms,
            "{}",
            notice.message
        );
    }
}

/// Forwards notice events from the bus to an emitter
pub struct NotificationHandler {
    emitter: Arc<dyn NotificationEmitter>,
}

impl NotificationHandler {
    pub fn new(emitter: Arc<dyn NotificationEmitter>) -> Self {
        Self { emitter }
    }
}

#[async_trait]
impl SessionEventHandler for NotificationHandler {
    async fn handle_event(&self, event: SessionEvent) -> Result<(), EventHandlerError> {
        if let SessionEvent::Notice(notice) = event {
            self.emitter.notify(&notice);
        }
        Ok(())
    }

    fn handler_name(&self) -> &'static str {
        "NotificationHandler"
    }
}
