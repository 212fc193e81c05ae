use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GameError {
    #[error("Malformed card set: {reason}")]
    MalformedCardSet { reason: String },
    #[error("Invalid showdown state: {reason}")]
    InvalidShowdownState { reason: String },
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Hole cards already full")]
    HoleCardsFull,
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Invalid player count: {count} (expected 2 to {max})")]
    InvalidPlayerCount { count: usize, max: usize },
}
