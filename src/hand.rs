//! Hand representation shared by the player and the dealer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u16 = 21;

/// Cards held by one party during a round.
///
/// The value is kept up to date on every [`add_card`](Self::add_card): each
/// ace enters as 11 and is knocked down to 1, one at a time, whenever the
/// total climbs past 21.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were received.
    cards: Vec<Card>,
    /// Current total.
    value: u16,
    /// Aces currently counted as 11.
    soft_aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            value: 0,
            soft_aces: 0,
        }
    }

    /// Adds a card to the hand and re-applies ace reduction.
    ///
    /// ```
    /// use bjtable::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Clubs, Rank::Nine));
    /// assert_eq!(hand.value(), 21);
    /// ```
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.value += u16::from(card.value());

        if card.is_ace() {
            self.soft_aces += 1;
        }

        self.adjust_for_aces();
    }

    fn adjust_for_aces(&mut self) {
        while self.value > BLACKJACK && self.soft_aces > 0 {
            self.value -= 10;
            self.soft_aces -= 1;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current value of the hand.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.value
    }

    /// Returns the number of aces still counted as 11.
    #[must_use]
    pub const fn soft_aces(&self) -> u8 {
        self.soft_aces
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.value > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
