use tokio::sync::broadcast;
use tracing::debug;

use super::events::SessionEvent;

const DEFAULT_CAPACITY: usize = 100;

/// Fan-out channel for session events
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl EventBus {
    /// Creates a bus that buffers up to `capacity` events per slow receiver
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Emits an event to every current subscriber
    pub fn emit(&self, event: SessionEvent) {
        let event_type = event.event_type();
        match self.sender.send(event) {
            Ok(receiver_count) => {
                debug!(
                    event_type,
                    receivers = receiver_count,
                    "Session event emitted"
                );
            }
            Err(_) => {
                debug!(event_type, "Session event emitted with no receivers");
            }
        }
    }

    /// Subscribe to all events emitted after this call
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }
}
