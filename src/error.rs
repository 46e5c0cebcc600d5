//! Error types for game operations.

use thiserror::Error;

/// The deck has no cards left to deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeck;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The bet could not be read as a whole number.
    #[error("bet must be a whole number")]
    NotAnInteger,
    /// The bet is zero or negative.
    #[error("bet must be greater than zero")]
    NonPositiveBet,
    /// The bet exceeds the player's balance.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Invalid round state for betting.
    #[error("invalid round state for betting")]
    InvalidState,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    EmptyDeck,
}

/// Errors that can occur during player or dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The round has no outcome yet, or was already settled.
    #[error("invalid round state for settlement")]
    InvalidState,
}

/// Engine faults surfaced while a session drives a round.
///
/// These indicate a broken call sequence or an exhausted deck, never bad
/// player input; input is validated by the [`Input`](crate::Input) side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Betting failed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player or dealer action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Settlement failed.
    #[error(transparent)]
    Settle(#[from] SettleError),
}

impl From<EmptyDeck> for DealError {
    fn from(_: EmptyDeck) -> Self {
        Self::EmptyDeck
    }
}

impl From<EmptyDeck> for ActionError {
    fn from(_: EmptyDeck) -> Self {
        Self::EmptyDeck
    }
}
