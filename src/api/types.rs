use serde::{Deserialize, Serialize};

use crate::event::Notice;
use crate::game::{GameSession, SessionSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPlayerRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    pub summary: SessionSummary,
    /// Round history rendered from the stored names
    pub history: Vec<String>,
    pub session: GameSession,
}

impl From<GameSession> for GameResponse {
    fn from(session: GameSession) -> Self {
        Self {
            summary: session.summary(),
            history: session.round_descriptions(),
            session,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundResponse {
    pub game: GameResponse,
    pub notices: Vec<Notice>,
}
