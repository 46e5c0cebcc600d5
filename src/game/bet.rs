use crate::error::{BetError, DealError};
use crate::ledger::Ledger;

use super::{Round, RoundState};

impl Round {
    /// Places the wager for this round.
    ///
    /// Only the ledger's pending bet is set here; the balance moves at
    /// settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for a bet, or if the
    /// ledger rejects the amount. The ledger and the round are unchanged on
    /// failure.
    pub fn place_bet(&mut self, ledger: &mut Ledger, amount: i64) -> Result<u64, BetError> {
        if self.state != RoundState::Betting {
            return Err(BetError::InvalidState);
        }

        let bet = ledger.place_bet(amount)?;
        self.bet = bet;
        self.state = RoundState::Dealing;

        tracing::debug!(bet, balance = ledger.total(), "bet placed");

        Ok(bet)
    }

    /// Deals the initial two cards each: player, player, dealer, dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed yet or if the deck holds
    /// fewer than four cards. Nothing is dealt in either case.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.cards_remaining() < 4 {
            return Err(DealError::EmptyDeck);
        }

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        self.state = RoundState::PlayerTurn;

        tracing::debug!(
            player = self.player.value(),
            dealer = self.dealer.value(),
            remaining = self.cards_remaining(),
            "initial cards dealt"
        );

        Ok(())
    }
}
