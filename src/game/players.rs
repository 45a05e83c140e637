use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::GameError;

pub const MAX_NAME_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub points: u32,
    pub dealer: bool,
}

impl Player {
    fn new(name: String, dealer: bool) -> Self {
        Self {
            name,
            points: 0,
            dealer,
        }
    }
}

/// Ordered table of players. Exactly one player holds the dealer flag
/// whenever the registry is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a player with zero points. The first player becomes dealer.
    pub fn add(&mut self, name: &str) -> Result<&Player, GameError> {
        if name.trim().is_empty() {
            return Err(GameError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(GameError::NameTooLong(name.to_string()));
        }
        if self.contains(name) {
            debug!(player = %name, "Rejected duplicate player name");
            return Err(GameError::DuplicateName(name.to_string()));
        }

        let dealer = self.players.is_empty();
        self.players.push(Player::new(name.to_string(), dealer));
        Ok(&self.players[self.players.len() - 1])
    }

    /// Removes the player at `index`. A removed dealer passes the flag to
    /// the next player in order, wrapping to the first.
    pub fn remove(&mut self, index: usize) -> Result<Player, GameError> {
        if index >= self.players.len() {
            return Err(GameError::IndexOutOfRange {
                index,
                len: self.players.len(),
            });
        }

        let removed = self.players.remove(index);
        if removed.dealer && !self.players.is_empty() {
            let next = index % self.players.len();
            self.players[next].dealer = true;
        }
        Ok(removed)
    }

    /// Passes the dealer flag to the next player, wrapping to the first.
    /// Returns the new dealer, or `None` for an empty registry.
    pub fn rotate_dealer(&mut self) -> Option<&Player> {
        if self.players.is_empty() {
            return None;
        }

        let next = match self.dealer_index() {
            Some(current) => {
                self.players[current].dealer = false;
                (current + 1) % self.players.len()
            }
            None => 0,
        };
        self.players[next].dealer = true;
        Some(&self.players[next])
    }

    pub fn dealer(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.dealer)
    }

    fn dealer_index(&self) -> Option<usize> {
        self.players.iter().position(|p| p.dealer)
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Zeroes every player's points, leaving the dealer where it is
    pub fn reset_points(&mut self) {
        for player in &mut self.players {
            player.points = 0;
        }
    }

    /// Names of players with at least `threshold` points, in table order
    pub fn at_or_above(&self, threshold: u32) -> Vec<String> {
        self.players
            .iter()
            .filter(|p| p.points >= threshold)
            .map(|p| p.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(names: &[&str]) -> PlayerRegistry {
        let mut registry = PlayerRegistry::new();
        for name in names {
            registry.add(name).unwrap();
        }
        registry
    }

    fn dealer_name(registry: &PlayerRegistry) -> Option<String> {
        registry.dealer().map(|p| p.name.clone())
    }

    #[test]
    fn test_first_player_becomes_dealer() {
        let registry = registry(&["Anna", "Bertil"]);

        assert_eq!(dealer_name(&registry), Some("Anna".to_string()));
        assert!(!registry.get("Bertil").unwrap().dealer);
        assert!(registry.iter().all(|p| p.points == 0));
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let mut registry = registry(&["Anna"]);

        let result = registry.add("Anna");
        assert_eq!(result, Err(GameError::DuplicateName("Anna".to_string())));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut registry = registry(&["Anna"]);

        assert!(registry.add("anna").is_ok());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_rejects_long_name() {
        let mut registry = PlayerRegistry::new();

        let result = registry.add("Maximiliana");
        assert_eq!(
            result,
            Err(GameError::NameTooLong("Maximiliana".to_string()))
        );
        assert!(registry.is_empty());

        // Ten characters, counted as characters rather than bytes
        assert!(registry.add("Åsa-Räkört").is_ok());
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut registry = PlayerRegistry::new();

        assert_eq!(registry.add("   "), Err(GameError::EmptyName));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_dealer_passes_flag_to_next() {
        let mut registry = registry(&["A", "B", "C"]);

        let removed = registry.remove(0).unwrap();
        assert!(removed.dealer);
        assert_eq!(dealer_name(&registry), Some("B".to_string()));
    }

    #[test]
    fn test_remove_last_dealer_wraps_to_first() {
        let mut registry = registry(&["A", "B", "C"]);
        registry.rotate_dealer();
        registry.rotate_dealer();
        assert_eq!(dealer_name(&registry), Some("C".to_string()));

        registry.remove(2).unwrap();
        assert_eq!(dealer_name(&registry), Some("A".to_string()));
        assert_eq!(registry.iter().filter(|p| p.dealer).count(), 1);
    }

    #[test]
    fn test_remove_non_dealer_keeps_dealer() {
        let mut registry = registry(&["A", "B", "C"]);

        registry.remove(1).unwrap();
        assert_eq!(dealer_name(&registry), Some("A".to_string()));
    }

    #[test]
    fn test_remove_only_player_leaves_no_dealer() {
        let mut registry = registry(&["A"]);

        registry.remove(0).unwrap();
        assert!(registry.is_empty());
        assert!(registry.dealer().is_none());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut registry = registry(&["A"]);

        assert_eq!(
            registry.remove(3),
            Err(GameError::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_rotate_dealer_wraps() {
        let mut registry = registry(&["A", "B"]);

        assert_eq!(registry.rotate_dealer().unwrap().name, "B");
        assert_eq!(registry.rotate_dealer().unwrap().name, "A");
    }

    #[test]
    fn test_rotate_dealer_on_empty_registry_is_noop() {
        let mut registry = PlayerRegistry::new();

        assert!(registry.rotate_dealer().is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_reset_points_keeps_dealer() {
        let mut registry = registry(&["A", "B"]);
        registry.get_mut("A").unwrap().points = 12;
        registry.rotate_dealer();

        registry.reset_points();
        assert!(registry.iter().all(|p| p.points == 0));
        assert_eq!(dealer_name(&registry), Some("B".to_string()));
    }
}
