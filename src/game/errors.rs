use thiserror::Error;

/// Input validation failures. None of these are transient; the session is
/// left unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("A player named {0} already exists")]
    DuplicateName(String),

    #[error("Player name {0} is longer than 10 characters")]
    NameTooLong(String),

    #[error("Player name cannot be empty")]
    EmptyName,

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
