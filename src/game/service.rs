use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::{
    event::{EventBus, Notice, NoticeDurations, SessionEvent},
    game::{errors::GameError, round::Round, session::GameSession},
    persistence::{
        forward_in_background, PersistenceError, PersistenceGateway, RemoteArchive,
        CURRENT_SESSION_KEY,
    },
    shared::AppError,
};

/// Result of scoring a round: the stored session and the notices it fired
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub session: GameSession,
    pub notices: Vec<Notice>,
}

/// Owns the live session. Every mutation works on a copy, persists it,
/// and only then replaces the live session and notifies observers, so a
/// failed operation leaves nothing half-applied.
pub struct GameService {
    session: RwLock<GameSession>,
    gateway: Arc<dyn PersistenceGateway>,
    remote_archive: Option<Arc<dyn RemoteArchive>>,
    event_bus: EventBus,
    notice_durations: NoticeDurations,
}

impl GameService {
    pub fn builder(gateway: Arc<dyn PersistenceGateway>) -> GameServiceBuilder {
        GameServiceBuilder::new(gateway)
    }

    /// Current state (read-only copy)
    pub async fn snapshot(&self) -> GameSession {
        self.session.read().await.clone()
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    #[instrument(skip(self))]
    pub async fn add_player(&self, name: &str) -> Result<GameSession, AppError> {
        let (session, ()) = self.mutate(|session| session.add_player(name)).await?;
        info!(player = %name, players = session.players().len(), "Player added");
        Ok(session)
    }

    #[instrument(skip(self))]
    pub async fn remove_player(&self, index: usize) -> Result<GameSession, AppError> {
        let (session, removed) = self.mutate(|session| session.remove_player(index)).await?;
        info!(player = %removed.name, "Player removed");
        Ok(session)
    }

    /// Scores a round. This is the only way points are added.
    #[instrument(skip(self, round), fields(round = %round))]
    pub async fn add_round(&self, round: Round) -> Result<RoundResult, AppError> {
        let (session, events) = self.mutate(|session| session.add_round(round)).await?;

        let notices: Vec<Notice> = events
            .iter()
            .map(|event| {
                Notice::new(
                    event.message(),
                    event.kind(),
                    self.notice_durations.for_kind(event.kind()),
                )
            })
            .collect();
        for notice in &notices {
            self.event_bus.emit(SessionEvent::Notice(notice.clone()));
        }

        info!(
            rounds = session.rounds().len(),
            notices = notices.len(),
            "Round added"
        );
        Ok(RoundResult { session, notices })
    }

    #[instrument(skip(self))]
    pub async fn remove_round(&self, index: usize) -> Result<GameSession, AppError> {
        let (session, removed) = self.mutate(|session| session.remove_round(index)).await?;
        info!(round = %removed, "Round removed");
        Ok(session)
    }

    /// Archives the session if any round was played, then clears rounds and
    /// points while keeping the players and the dealer.
    #[instrument(skip(self))]
    pub async fn reset_rounds(&self) -> Result<GameSession, AppError> {
        let mut current = self.session.write().await;
        self.archive(&current).await?;

        let mut next = current.clone();
        next.reset_rounds();
        self.commit(&mut current, next).await
    }

    /// Archives the session if any round was played, then starts a new,
    /// empty session.
    #[instrument(skip(self))]
    pub async fn reset_all(&self) -> Result<GameSession, AppError> {
        let mut current = self.session.write().await;
        self.archive(&current).await?;

        self.commit(&mut current, GameSession::new()).await
    }

    pub async fn archived_sessions(&self) -> Result<Vec<GameSession>, AppError> {
        Ok(self.gateway.load_archive().await?)
    }

    async fn mutate<T>(
        &self,
        operation: impl FnOnce(&mut GameSession) -> Result<T, GameError>,
    ) -> Result<(GameSession, T), AppError> {
        let mut current = self.session.write().await;
        let mut next = current.clone();
        let output = operation(&mut next)?;
        let session = self.commit(&mut current, next).await?;
        Ok((session, output))
    }

    /// Persists `next`, then makes it the live session
    async fn commit(
        &self,
        current: &mut GameSession,
        next: GameSession,
    ) -> Result<GameSession, AppError> {
        self.gateway.save(CURRENT_SESSION_KEY, &next).await?;
        *current = next.clone();

        self.event_bus.emit(SessionEvent::Updated {
            session_id: next.id().to_string(),
            players: next.players().len(),
            rounds: next.rounds().len(),
        });
        Ok(next)
    }

    /// Copies a played session to the local archive and, when configured,
    /// to the remote one. Returns whether anything was archived.
    async fn archive(&self, session: &GameSession) -> Result<bool, AppError> {
        if !session.is_archivable() {
            debug!(session_id = %session.id(), "Session has no rounds, not archiving");
            return Ok(false);
        }

        self.gateway.append_archive(session).await?;
        info!(
            session_id = %session.id(),
            rounds = session.rounds().len(),
            "Session archived"
        );

        if let Some(remote) = &self.remote_archive {
            forward_in_background(Arc::clone(remote), session.clone());
        }

        self.event_bus.emit(SessionEvent::Archived {
            session_id: session.id().to_string(),
            rounds: session.rounds().len(),
        });
        Ok(true)
    }
}

pub struct GameServiceBuilder {
    gateway: Arc<dyn PersistenceGateway>,
    remote_archive: Option<Arc<dyn RemoteArchive>>,
    event_bus: Option<EventBus>,
    notice_durations: NoticeDurations,
}

impl GameServiceBuilder {
    fn new(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self {
            gateway,
            remote_archive: None,
            event_bus: None,
            notice_durations: NoticeDurations::default(),
        }
    }

    pub fn with_remote_archive(mut self, remote_archive: Arc<dyn RemoteArchive>) -> Self {
        self.remote_archive = Some(remote_archive);
        self
    }

    pub fn with_event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    pub fn with_notice_durations(mut self, notice_durations: NoticeDurations) -> Self {
        self.notice_durations = notice_durations;
        self
    }

    /// Loads the stored session, or creates and stores a fresh one when
    /// nothing usable is stored.
    pub async fn load(self) -> Result<GameService, PersistenceError> {
        let session = match self.gateway.load(CURRENT_SESSION_KEY).await {
            Ok(Some(session)) => {
                info!(
                    session_id = %session.id(),
                    players = session.players().len(),
                    rounds = session.rounds().len(),
                    "Loaded stored session"
                );
                session
            }
            Ok(None) => self.create_session().await?,
            Err(PersistenceError::Serialization(e)) => {
                warn!(error = %e, "Stored session is unreadable, starting a new one");
                self.create_session().await?
            }
            Err(e) => return Err(e),
        };

        Ok(GameService {
            session: RwLock::new(session),
            gateway: self.gateway,
            remote_archive: self.remote_archive,
            event_bus: self.event_bus.unwrap_or_default(),
            notice_durations: self.notice_durations,
        })
    }

    async fn create_session(&self) -> Result<GameSession, PersistenceError> {
        let session = GameSession::new();
        self.gateway.save(CURRENT_SESSION_KEY, &session).await?;
        info!(session_id = %session.id(), "Created new session");
        Ok(session)
    }
}
