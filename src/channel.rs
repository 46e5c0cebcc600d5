//! Boundary between the engine and whatever talks to the player.
//!
//! The engine never prompts or prints. A [`GameSession`](crate::GameSession)
//! plays against a table that implements both traits: it asks the [`Input`]
//! side for validated decisions and hands every visible change to the
//! [`Output`] side as an [`Event`].

use crate::card::Card;
use crate::hand::Hand;
use crate::result::Outcome;

/// The player's choice during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// Source of player decisions.
///
/// Implementations own the retry loop: invalid answers are reported to the
/// player and asked again, so every `Some` value is already valid. `None`
/// means the input source is gone and the session should stop.
pub trait Input {
    /// Reads a bet between 1 and `balance` inclusive.
    fn read_bet(&mut self, balance: u64) -> Option<u64>;

    /// Reads a hit or stand decision.
    fn read_decision(&mut self) -> Option<Decision>;

    /// Asks whether to play another round.
    fn play_again(&mut self) -> Option<bool>;
}

/// Something the player should see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// A new round is starting.
    Welcome {
        /// Current balance.
        balance: u64,
    },
    /// The table during the player's turn; the dealer's hole card stays hidden.
    Table {
        /// The dealer's face-up card.
        dealer_up: Card,
        /// The player's hand.
        player: &'a Hand,
    },
    /// The player drew a card.
    PlayerHits {
        /// The card drawn.
        card: Card,
        /// The player's new total.
        value: u16,
    },
    /// The player stood; play passes to the dealer.
    PlayerStands,
    /// The dealer turned over the hole card.
    DealerReveals {
        /// The hole card.
        hole: Card,
        /// The dealer's total.
        value: u16,
    },
    /// The dealer drew a card.
    DealerDraws {
        /// The card drawn.
        card: Card,
        /// The dealer's new total.
        value: u16,
    },
    /// Both hands, fully revealed.
    Showdown {
        /// The player's hand.
        player: &'a Hand,
        /// The dealer's hand.
        dealer: &'a Hand,
    },
    /// The round outcome.
    Outcome(Outcome),
    /// The balance after settlement.
    Balance(u64),
    /// The player has no chips left.
    OutOfChips,
    /// The player chose to stop.
    Goodbye,
}

/// Sink for [`Event`]s.
pub trait Output {
    /// Shows an event to the player.
    fn render(&mut self, event: &Event<'_>);
}
