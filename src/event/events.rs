use serde::{Deserialize, Serialize};

use super::notice::Notice;

/// Facts about a session that has already changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The session was mutated and persisted
    Updated {
        session_id: String,
        players: usize,
        rounds: usize,
    },

    /// A finished session was copied to the archive
    Archived { session_id: String, rounds: usize },

    /// Something the table should be told about
    Notice(Notice),
}

impl SessionEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::Updated { .. } => "updated",
            SessionEvent::Archived { .. } => "archived",
            SessionEvent::Notice(_) => "notice",
        }
    }
}
