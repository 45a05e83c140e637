use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Poker hands that can win the best-hand bonus, lowest first.
///
/// The discriminant is the rank, which is also the number of points the
/// best-hand winner receives.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Hand {
    pub fn rank(&self) -> u32 {
        *self as u32
    }

    /// Name shown at the table
    pub fn name(&self) -> &'static str {
        match self {
            Hand::HighCard => "Högst kort",
            Hand::Pair => "Par",
            Hand::TwoPair => "Tvåpar",
            Hand::ThreeOfAKind => "Triss",
            Hand::Straight => "Stege",
            Hand::Flush => "Färg",
            Hand::FullHouse => "Kåk",
            Hand::FourOfAKind => "Fyrtal",
            Hand::StraightFlush => "Färgstege",
            Hand::RoyalFlush => "Royal Flush",
        }
    }

    pub fn from_rank(rank: u32) -> Option<Self> {
        Hand::iter().find(|hand| hand.rank() == rank)
    }

    /// The full catalog in rank order
    pub fn catalog() -> Vec<HandInfo> {
        Hand::iter().map(HandInfo::from).collect()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Read-only catalog entry for clients that render the hand picker
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HandInfo {
    pub id: Hand,
    pub name: String,
    pub rank: u32,
}

impl From<Hand> for HandInfo {
    fn from(hand: Hand) -> Self {
        Self {
            id: hand,
            name: hand.name().to_string(),
            rank: hand.rank(),
        }
    }
}
