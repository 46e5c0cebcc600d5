use crate::card::Card;
use crate::error::ActionError;
use crate::result::Outcome;

use super::{Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the player's turn on the spot; the round goes straight to
    /// [`Outcome::PlayerBust`] and the dealer never plays.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.add_card(card);

        tracing::debug!(%card, value = self.player.value(), "player hits");

        if self.player.is_bust() {
            self.state = RoundState::Resolved(Outcome::PlayerBust);
            tracing::debug!(value = self.player.value(), "player busts");
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.state = RoundState::DealerTurn;
        tracing::debug!(value = self.player.value(), "player stands");

        Ok(())
    }
}
