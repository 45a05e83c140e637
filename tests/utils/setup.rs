use std::sync::Arc;
use tokio::task::JoinHandle;

use chicago::{
    event::{EventBus, EventSubscription, NotificationHandler},
    persistence::InMemoryStore,
    GameService, RemoteArchive,
};

use super::mocks::RecordingEmitter;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub game_service: Arc<GameService>,
    pub store: Arc<InMemoryStore>,
    pub emitter: RecordingEmitter,
    pub event_bus: EventBus,
    pub _subscription_handle: JoinHandle<()>,
}

pub struct TestSetupBuilder {
    players: Vec<String>,
    remote_archive: Option<Arc<dyn RemoteArchive>>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            players: vec![],
            remote_archive: None,
        }
    }

    pub fn with_players(mut self, players: Vec<&str>) -> Self {
        self.players = players.into_iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_two_players(self) -> Self {
        self.with_players(vec!["Anna", "Bertil"])
    }

    pub fn with_four_players(self) -> Self {
        self.with_players(vec!["Anna", "Bertil", "Cecilia", "David"])
    }

    pub fn with_remote_archive(mut self, remote_archive: Arc<dyn RemoteArchive>) -> Self {
        self.remote_archive = Some(remote_archive);
        self
    }

    pub async fn build(self) -> TestSetup {
        let event_bus = EventBus::new(64);
        let store = Arc::new(InMemoryStore::new());
        let emitter = RecordingEmitter::default();

        let subscription_handle = EventSubscription::new(
            Arc::new(NotificationHandler::new(Arc::new(emitter.clone()))),
            event_bus.clone(),
        )
        .start();

        let mut builder = GameService::builder(store.clone()).with_event_bus(event_bus.clone());
        if let Some(remote_archive) = self.remote_archive {
            builder = builder.with_remote_archive(remote_archive);
        }
        let game_service = Arc::new(builder.load().await.unwrap());

        for player in &self.players {
            game_service.add_player(player).await.unwrap();
        }

        TestSetup {
            game_service,
            store,
            emitter,
            event_bus,
            _subscription_handle: subscription_handle,
        }
    }
}
