extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, SettleError};
use crate::hand::Hand;
use crate::ledger::Ledger;
use crate::result::{Outcome, RoundResult};

use super::{Round, RoundState};

/// Total at which the dealer stops drawing.
const DEALER_STANDS_ON: u16 = 17;

/// Decides the outcome of a finished round.
///
/// A player bust is checked first, then a dealer bust, and only then are the
/// totals compared. A dealer on 22 therefore loses to a player on 21.
///
/// ```
/// use bjtable::{Card, Hand, Outcome, Rank, Suit, resolve};
///
/// let mut player = Hand::new();
/// player.add_card(Card::new(Suit::Hearts, Rank::King));
/// player.add_card(Card::new(Suit::Hearts, Rank::Ace));
///
/// let mut dealer = Hand::new();
/// for rank in [Rank::Queen, Rank::Six, Rank::Six] {
///     dealer.add_card(Card::new(Suit::Spades, rank));
/// }
///
/// assert_eq!(resolve(&player, &dealer), Outcome::DealerBust);
/// ```
#[must_use]
pub fn resolve(player: &Hand, dealer: &Hand) -> Outcome {
    if player.is_bust() {
        Outcome::PlayerBust
    } else if dealer.is_bust() {
        Outcome::DealerBust
    } else if dealer.value() > player.value() {
        Outcome::DealerWin
    } else if dealer.value() < player.value() {
        Outcome::PlayerWin
    } else {
        Outcome::Push
    }
}

impl Round {
    /// Returns whether the dealer has to take another card.
    ///
    /// The dealer hits below 17 and stands on 17 or more. A soft 17 stands
    /// too, unless `stand_on_soft_17` is disabled.
    #[must_use]
    pub const fn dealer_must_hit(&self) -> bool {
        let value = self.dealer.value();
        if value < DEALER_STANDS_ON {
            return true;
        }
        value == DEALER_STANDS_ON && self.dealer.is_soft() && !self.options.stand_on_soft_17
    }

    /// Plays a single dealer step.
    ///
    /// Draws and returns one card if the dealer must hit. Otherwise the round
    /// is resolved and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn, or the dealer must
    /// draw from an empty deck.
    pub fn dealer_hit(&mut self) -> Result<Option<Card>, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        if !self.dealer_must_hit() {
            let outcome = resolve(&self.player, &self.dealer);
            self.state = RoundState::Resolved(outcome);
            tracing::debug!(
                ?outcome,
                player = self.player.value(),
                dealer = self.dealer.value(),
                "round resolved"
            );
            return Ok(None);
        }

        let card = self.draw()?;
        self.dealer.add_card(card);
        tracing::debug!(%card, value = self.dealer.value(), "dealer hits");

        Ok(Some(card))
    }

    /// Dealer plays their hand to completion.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        let mut drawn_cards = Vec::new();

        while let Some(card) = self.dealer_hit()? {
            drawn_cards.push(card);
        }

        Ok(drawn_cards)
    }

    /// Applies the outcome to the ledger.
    ///
    /// Wins add this round's bet to the balance, losses subtract it, a push
    /// leaves the balance alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been resolved or has already
    /// been settled.
    pub fn settle(&mut self, ledger: &mut Ledger) -> Result<RoundResult, SettleError> {
        let RoundState::Resolved(outcome) = self.state else {
            return Err(SettleError::InvalidState);
        };

        ledger.settle(outcome, self.bet);
        self.state = RoundState::Settled(outcome);

        tracing::debug!(?outcome, bet = self.bet, balance = ledger.total(), "round settled");

        Ok(RoundResult {
            outcome,
            bet: self.bet,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            balance: ledger.total(),
        })
    }
}
