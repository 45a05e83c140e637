use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use std::time::Duration;
use tokio::sync::mpsc;

use chicago::{
    event::NotificationEmitter, persistence::PersistenceError, GameSession, Notice, RemoteArchive,
};

const WAIT: Duration = Duration::from_secs(2);

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Remote archive that hands every forwarded session to the test
pub struct RecordingRemoteArchive {
    sender: mpsc::UnboundedSender<GameSession>,
    receiver: tokio::sync::Mutex<mpsc::UnboundedReceiver<GameSession>>,
}

impl RecordingRemoteArchive {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver: tokio::sync::Mutex::new(receiver),
        }
    }

    /// Waits for the next forwarded session
    pub async fn next_forwarded(&self) -> Option<GameSession> {
        let mut receiver = self.receiver.lock().await;
        tokio::time::timeout(WAIT, receiver.recv())
            .await
            .ok()
            .flatten()
    }
}

#[async_trait]
impl RemoteArchive for RecordingRemoteArchive {
    async fn forward(&self, session: &GameSession) -> Result<(), PersistenceError> {
        self.sender
            .send(session.clone())
            .map_err(|e| PersistenceError::Remote(e.to_string()))
    }
}

/// Remote archive that is always unreachable
#[derive(Default)]
pub struct FailingRemoteArchive {
    attempts: AtomicUsize,
}

impl FailingRemoteArchive {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteArchive for FailingRemoteArchive {
    async fn forward(&self, _session: &GameSession) -> Result<(), PersistenceError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(PersistenceError::Remote("connection refused".to_string()))
    }
}

/// Emitter that keeps every notice it is asked to show
#[derive(Clone, Default)]
pub struct RecordingEmitter {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingEmitter {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    /// Polls until at least `count` notices arrived or the wait runs out
    pub async fn wait_for(&self, count: usize) -> Vec<Notice> {
        let deadline = tokio::time::Instant::now() + WAIT;
        while self.notices().len() < count && tokio::time::Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.notices()
    }
}

impl NotificationEmitter for RecordingEmitter {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}
