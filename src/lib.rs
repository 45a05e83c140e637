// Library crate for the Chicago score keeper
// This file exposes the public API for the binary and integration tests

pub mod api;
pub mod config;
pub mod event;
pub mod game;
pub mod persistence;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use event::{EventBus, Notice, NoticeKind, SessionEvent};
pub use game::{GameError, GameService, GameSession, Hand, Round};
pub use persistence::{PersistenceGateway, RemoteArchive};
pub use shared::{AppError, AppState};
