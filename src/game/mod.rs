// Public API
pub use errors::GameError;
pub use hands::{Hand, HandInfo};
pub use players::{Player, PlayerRegistry, MAX_NAME_LENGTH};
pub use round::{Round, LAST_CARD_BONUS};
pub use scoring::{
    apply_round, reverse_round, validate_round, ScoreEvent, ScoredRound,
    PURCHASE_STOP_THRESHOLD, WINNER_THRESHOLD,
};
pub use service::{GameService, GameServiceBuilder, RoundResult};
pub use session::{GameSession, SessionSummary};

// Internal modules
mod errors;
mod hands;
mod players;
mod round;
mod scoring;
mod service;
mod session;
