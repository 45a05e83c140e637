// Score engine: turns a round outcome into new player state plus the
// notices that the round triggers.
//
// Both entry points are pure. They take the registry by reference and hand
// back a new one, so a caller can drop the result on failure and keep the
// old state untouched.

use serde::{Deserialize, Serialize};

use super::errors::GameError;
use super::players::{Player, PlayerRegistry};
use super::round::{Round, LAST_CARD_BONUS};
use crate::event::NoticeKind;

/// Players at or above this total may not trade cards any more
pub const PURCHASE_STOP_THRESHOLD: u32 = 17;
/// Players at or above this total have won
pub const WINNER_THRESHOLD: u32 = 21;

/// Something a round caused that the table should be told about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScoreEvent {
    Winner { player: String },
    PurchaseStop { player: String },
    NewDealer { player: String },
}

impl ScoreEvent {
    pub fn player(&self) -> &str {
        match self {
            ScoreEvent::Winner { player } => player,
            ScoreEvent::PurchaseStop { player } => player,
            ScoreEvent::NewDealer { player } => player,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ScoreEvent::Winner { player } => format!("{} wins!", player),
            ScoreEvent::PurchaseStop { player } => {
                format!("{} has reached purchase-stop", player)
            }
            ScoreEvent::NewDealer { player } => format!("{} is dealer", player),
        }
    }

    pub fn kind(&self) -> NoticeKind {
        match self {
            ScoreEvent::Winner { .. } => NoticeKind::Celebration,
            ScoreEvent::PurchaseStop { .. } => NoticeKind::Warning,
            ScoreEvent::NewDealer { .. } => NoticeKind::Info,
        }
    }
}

/// Registry after a round was applied, plus the notices it fired in
/// display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRound {
    pub players: PlayerRegistry,
    pub events: Vec<ScoreEvent>,
}

/// Fails with `UnknownPlayer` for the first name the round refers to that
/// is not at the table
pub fn validate_round(players: &PlayerRegistry, round: &Round) -> Result<(), GameError> {
    match round
        .referenced_names()
        .into_iter()
        .find(|name| !players.contains(name))
    {
        Some(missing) => Err(GameError::UnknownPlayer(missing.to_string())),
        None => Ok(()),
    }
}

/// Applies a round: illegal-trade zeroing, last-card bonus, best-hand bonus,
/// threshold notices, then dealer rotation.
pub fn apply_round(players: &PlayerRegistry, round: &Round) -> Result<ScoredRound, GameError> {
    validate_round(players, round)?;

    let mut next = players.clone();
    let winners_before = next.at_or_above(WINNER_THRESHOLD);
    let stopped_before = next.at_or_above(PURCHASE_STOP_THRESHOLD);

    // Zeroing, not subtracting: the previous total is gone for good
    for name in &round.illegal_traders {
        player_mut(&mut next, name)?.points = 0;
    }
    player_mut(&mut next, &round.last_card_winner)?.points += LAST_CARD_BONUS;
    player_mut(&mut next, &round.best_hand_winner)?.points += round.best_hand.rank();

    let new_winners = newly_reached(&next, WINNER_THRESHOLD, &winners_before);
    let new_stopped = newly_reached(&next, PURCHASE_STOP_THRESHOLD, &stopped_before);

    let mut events: Vec<ScoreEvent> = announced_winners(new_winners, &round.last_card_winner)
        .into_iter()
        .map(|player| ScoreEvent::Winner { player })
        .collect();
    let has_winner = !events.is_empty();

    if !has_winner {
        events.extend(
            new_stopped
                .into_iter()
                .map(|player| ScoreEvent::PurchaseStop { player }),
        );
    }

    let dealer = next.rotate_dealer().map(|p| p.name.clone());
    if let (false, Some(player)) = (has_winner, dealer) {
        events.push(ScoreEvent::NewDealer { player });
    }

    Ok(ScoredRound {
        players: next,
        events,
    })
}

/// Takes back the bonuses a round awarded. Points zeroed by an illegal
/// trade are not restored and the dealer stays where it is.
pub fn reverse_round(players: &PlayerRegistry, round: &Round) -> Result<PlayerRegistry, GameError> {
    validate_round(players, round)?;

    let mut next = players.clone();
    let last_card = player_mut(&mut next, &round.last_card_winner)?;
    last_card.points = last_card.points.saturating_sub(LAST_CARD_BONUS);
    let best_hand = player_mut(&mut next, &round.best_hand_winner)?;
    best_hand.points = best_hand.points.saturating_sub(round.best_hand.rank());

    Ok(next)
}

fn player_mut<'a>(players: &'a mut PlayerRegistry, name: &str) -> Result<&'a mut Player, GameError> {
    players
        .get_mut(name)
        .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
}

fn newly_reached(players: &PlayerRegistry, threshold: u32, before: &[String]) -> Vec<String> {
    players
        .at_or_above(threshold)
        .into_iter()
        .filter(|name| !before.contains(name))
        .collect()
}

/// When several players pass 21 together the last-card winner takes the
/// win alone. Without a match every new winner is announced.
fn announced_winners(new_winners: Vec<String>, last_card_winner: &str) -> Vec<String> {
    if new_winners.len() >= 2 && new_winners.iter().any(|name| name == last_card_winner) {
        return vec![last_card_winner.to_string()];
    }
    new_winners
}
