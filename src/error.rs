//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck. A deck is never refilled mid-round.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

/// Errors that can occur when running a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session was configured with zero rounds.
    #[error("session must play at least one round")]
    NoRounds,
    /// The configured bet is zero, negative, or not a number.
    #[error("bet per round must be a positive amount")]
    InvalidBet,
    /// A round drained the deck before it could finish.
    #[error(transparent)]
    Draw(#[from] DrawError),
}
