// Change-broadcast infrastructure
//
// The game service publishes a SessionEvent after every mutation. Observers
// subscribe through the EventBus and never touch session state themselves.

// Public API - what other modules can use
pub use bus::EventBus;
pub use events::SessionEvent;
pub use handler::{EventHandlerError, SessionEventHandler};
pub use notice::{
    Notice, NoticeDurations, NoticeKind, NotificationEmitter, NotificationHandler, TracingEmitter,
};
pub use subscription::EventSubscription;

// Internal modules
mod bus;
mod events;
mod handler;
mod notice;
mod subscription;
