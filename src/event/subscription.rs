use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{bus::EventBus, handler::SessionEventHandler};

/// Routes every event on the bus to one handler from a background task
pub struct EventSubscription {
    handler: Arc<dyn SessionEventHandler>,
    event_bus: EventBus,
}

impl EventSubscription {
    pub fn new(handler: Arc<dyn SessionEventHandler>, event_bus: EventBus) -> Self {
        Self { handler, event_bus }
    }

    /// Subscribes immediately, so no event emitted after this call is
    /// missed, then spawns the routing task.
    pub fn start(self) -> JoinHandle<()> {
        let EventSubscription { handler, event_bus } = self;
        let handler_name = handler.handler_name();
        // Only the receiver moves into the task, so the routing loop ends
        // once every bus handle is dropped
        let mut receiver = event_bus.subscribe();
        drop(event_bus);

        info!(handler = handler_name, "Starting event subscription");

        tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => {
                        debug!(
                            handler = handler_name,
                            event_type = event.event_type(),
                            "Received session event"
                        );

                        if let Err(e) = handler.handle_event(event).await {
                            warn!(
                                handler = handler_name,
                                error = %e,
                                "Session event handler failed"
                            );
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(handler = handler_name, skipped, "Subscriber lagged, events dropped");
                    }
                    Err(RecvError::Closed) => break,
                }
            }

            debug!(handler = handler_name, "Event subscription ended");
        })
    }
}
