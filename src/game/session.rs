use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::GameError;
use super::players::{Player, PlayerRegistry};
use super::round::Round;
use super::scoring::{self, ScoreEvent, PURCHASE_STOP_THRESHOLD, WINNER_THRESHOLD};

fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// One game at the table: players, the rounds played in order, and when
/// the game started. All scoring goes through `add_round`/`remove_round`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    #[serde(default = "new_session_id")]
    id: String,
    #[serde(default)]
    players: PlayerRegistry,
    #[serde(default)]
    rounds: Vec<Round>,
    #[serde(default = "Utc::now")]
    created: DateTime<Utc>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A fresh session with no players and no rounds
    pub fn new() -> Self {
        Self {
            id: new_session_id(),
            players: PlayerRegistry::new(),
            rounds: Vec::new(),
            created: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn add_player(&mut self, name: &str) -> Result<(), GameError> {
        self.players.add(name)?;
        Ok(())
    }

    /// Removes a player. Rounds that mention the player are kept as played.
    pub fn remove_player(&mut self, index: usize) -> Result<Player, GameError> {
        self.players.remove(index)
    }

    /// Scores a round and appends it to the history
    pub fn add_round(&mut self, round: Round) -> Result<Vec<ScoreEvent>, GameError> {
        let scored = scoring::apply_round(&self.players, &round)?;
        self.players = scored.players;
        self.rounds.push(round);
        Ok(scored.events)
    }

    /// Takes back a round's bonuses and drops it from the history. Later
    /// rounds are not replayed.
    pub fn remove_round(&mut self, index: usize) -> Result<Round, GameError> {
        let round = self.rounds.get(index).ok_or(GameError::IndexOutOfRange {
            index,
            len: self.rounds.len(),
        })?;
        self.players = scoring::reverse_round(&self.players, round)?;
        Ok(self.rounds.remove(index))
    }

    /// Starts over with the same players: no rounds, zero points, a new
    /// identity and creation time. The dealer stays where it is.
    pub fn reset_rounds(&mut self) {
        self.rounds.clear();
        self.players.reset_points();
        self.id = new_session_id();
        self.created = Utc::now();
    }

    /// Only sessions with at least one played round are worth archiving
    pub fn is_archivable(&self) -> bool {
        !self.rounds.is_empty()
    }

    /// Human-readable history, built from the names stored in each round
    pub fn round_descriptions(&self) -> Vec<String> {
        self.rounds
            .iter()
            .enumerate()
            .map(|(index, round)| format!("Round {}: {}", index + 1, round))
            .collect()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id.clone(),
            created: self.created,
            player_count: self.players.len(),
            round_count: self.rounds.len(),
            dealer: self.players.dealer().map(|p| p.name.clone()),
            purchase_stopped: self.players.at_or_above(PURCHASE_STOP_THRESHOLD),
            winners: self.players.at_or_above(WINNER_THRESHOLD),
        }
    }
}

/// Metadata shown above the score table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub created: DateTime<Utc>,
    pub player_count: usize,
    pub round_count: usize,
    pub dealer: Option<String>,
    pub purchase_stopped: Vec<String>,
    pub winners: Vec<String>,
}
