//! Round engine and state management.

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::EmptyDeck;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Outcome;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::resolve;
pub use state::RoundState;

/// One round of blackjack between the player and the dealer.
///
/// The round owns its deck and both hands; nothing is shared with other
/// rounds. The chip [`Ledger`](crate::Ledger) lives outside and is only
/// borrowed when the bet is placed and when the round is settled.
///
/// # Example
///
/// ```
/// use bjtable::{GameOptions, Ledger, Round, RoundState};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let mut ledger = Ledger::default();
/// let mut round = Round::shuffled(&mut rng, GameOptions::default());
///
/// round.place_bet(&mut ledger, 10).unwrap();
/// round.deal().unwrap();
/// round.stand().unwrap();
/// round.dealer_play().unwrap();
/// let result = round.settle(&mut ledger).unwrap();
///
/// assert!(matches!(round.state(), RoundState::Settled(_)));
/// assert_eq!(result.balance, ledger.total());
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    /// Undealt cards.
    deck: Deck,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand; the first card is the hole card.
    dealer: Hand,
    /// Current state.
    state: RoundState,
    /// Amount wagered this round.
    bet: u64,
    /// Rules in effect.
    options: GameOptions,
}

impl Round {
    /// Creates a round that will deal from `deck` as given.
    #[must_use]
    pub const fn new(deck: Deck, options: GameOptions) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Betting,
            bet: 0,
            options,
        }
    }

    /// Creates a round with a fresh deck shuffled by `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R, options: GameOptions) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::new(deck, options)
    }

    fn draw(&mut self) -> Result<Card, EmptyDeck> {
        self.deck.deal()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the outcome, once decided.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Returns the amount wagered this round (0 before betting).
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns the rules in effect.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's full hand, hole card included.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's face-down card.
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.dealer.cards().first()
    }

    /// Returns the dealer's face-up card.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.cards().get(1)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }
}
