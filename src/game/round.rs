use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::hands::Hand;

/// Points for taking the last trick
pub const LAST_CARD_BONUS: u32 = 2;

/// Outcome of one played round. Players are referenced by name only, so a
/// record stays readable after the player has left the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub last_card_winner: String,
    pub best_hand_winner: String,
    pub best_hand: Hand,
    #[serde(default)]
    pub illegal_traders: BTreeSet<String>,
}

impl Round {
    pub fn new(
        last_card_winner: impl Into<String>,
        best_hand_winner: impl Into<String>,
        best_hand: Hand,
    ) -> Self {
        Self {
            last_card_winner: last_card_winner.into(),
            best_hand_winner: best_hand_winner.into(),
            best_hand,
            illegal_traders: BTreeSet::new(),
        }
    }

    pub fn with_illegal_trader(mut self, name: impl Into<String>) -> Self {
        self.illegal_traders.insert(name.into());
        self
    }

    /// Every player name this round refers to, without duplicates
    pub fn referenced_names(&self) -> BTreeSet<&str> {
        let mut names: BTreeSet<&str> = self.illegal_traders.iter().map(String::as_str).collect();
        names.insert(self.last_card_winner.as_str());
        names.insert(self.best_hand_winner.as_str());
        names
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "last card {} (+{}p), best hand {} ({}, +{}p)",
            self.last_card_winner,
            LAST_CARD_BONUS,
            self.best_hand_winner,
            self.best_hand.name(),
            self.best_hand.rank()
        )?;
        if !self.illegal_traders.is_empty() {
            let traders: Vec<&str> = self.illegal_traders.iter().map(String::as_str).collect();
            write!(f, ", illegal trade {}", traders.join(", "))?;
        }
        Ok(())
    }
}
