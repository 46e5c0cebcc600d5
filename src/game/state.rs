//! Round state types.

use crate::result::Outcome;

/// Round state.
///
/// A round moves strictly forward:
/// `Betting → Dealing → PlayerTurn → DealerTurn → Resolved → Settled`,
/// with a player bust jumping from `PlayerTurn` straight to `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the wager.
    Betting,
    /// Bet placed; initial cards not dealt yet.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Outcome decided; the ledger has not been touched yet.
    Resolved(Outcome),
    /// Outcome applied to the ledger.
    Settled(Outcome),
}

impl RoundState {
    /// Returns the outcome once the round has been resolved.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Resolved(outcome) | Self::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }
}
