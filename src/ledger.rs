//! The player's chip ledger.

use core::num::IntErrorKind;

use crate::error::BetError;
use crate::result::Outcome;

/// Chips a session starts with unless configured otherwise.
pub const DEFAULT_CHIPS: u64 = 100;

/// Validates a bet amount against a balance.
///
/// # Errors
///
/// Returns [`BetError::NonPositiveBet`] for zero or negative amounts and
/// [`BetError::InsufficientFunds`] when the amount exceeds `total`.
pub fn check_bet(amount: i64, total: u64) -> Result<u64, BetError> {
    let Ok(amount) = u64::try_from(amount) else {
        return Err(BetError::NonPositiveBet);
    };

    if amount == 0 {
        return Err(BetError::NonPositiveBet);
    }

    if amount > total {
        return Err(BetError::InsufficientFunds);
    }

    Ok(amount)
}

/// Parses and validates a bet typed by the player.
///
/// ```
/// use bjtable::{BetError, parse_bet};
///
/// assert_eq!(parse_bet(" 25 ", 100), Ok(25));
/// assert_eq!(parse_bet("ten", 100), Err(BetError::NotAnInteger));
/// assert_eq!(parse_bet("0", 100), Err(BetError::NonPositiveBet));
/// assert_eq!(parse_bet("101", 100), Err(BetError::InsufficientFunds));
/// ```
///
/// Whole numbers outside the `i64` range are still whole numbers: huge
/// positive ones exceed any balance, huge negative ones are not positive.
///
/// # Errors
///
/// Returns [`BetError::NotAnInteger`] if the input is not a whole number,
/// otherwise whatever [`check_bet`] rejects.
pub fn parse_bet(input: &str, total: u64) -> Result<u64, BetError> {
    let amount = input.trim().parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => BetError::InsufficientFunds,
        IntErrorKind::NegOverflow => BetError::NonPositiveBet,
        _ => BetError::NotAnInteger,
    })?;

    check_bet(amount, total)
}

/// Tracks the running balance and the bet for the current round.
///
/// The balance only changes on settlement, and settlement moves the amount
/// it is given rather than whatever bet is pending, so a wager placed later
/// cannot change what an earlier round pays or costs. Every settlement call
/// clears the pending bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    total: u64,
    bet: u64,
}

impl Ledger {
    /// Creates a ledger with the given starting balance and no bet.
    #[must_use]
    pub const fn new(total: u64) -> Self {
        Self { total, bet: 0 }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the bet for the current round (0 when none is pending).
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns whether the balance has run out.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.total == 0
    }

    /// Places a bet for the current round.
    ///
    /// On failure the ledger is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NonPositiveBet`] or [`BetError::InsufficientFunds`]
    /// as described in [`check_bet`].
    pub fn place_bet(&mut self, amount: i64) -> Result<u64, BetError> {
        let amount = check_bet(amount, self.total)?;
        self.bet = amount;
        Ok(amount)
    }

    /// Pays out `amount`.
    pub const fn win_bet(&mut self, amount: u64) {
        self.total = self.total.saturating_add(amount);
        self.bet = 0;
    }

    /// Collects `amount`.
    pub const fn lose_bet(&mut self, amount: u64) {
        self.total = self.total.saturating_sub(amount);
        self.bet = 0;
    }

    /// Returns the pending bet to the player; the balance does not move.
    pub const fn push(&mut self) {
        self.bet = 0;
    }

    /// Applies a round outcome for a wager of `amount`.
    pub const fn settle(&mut self, outcome: Outcome, amount: u64) {
        match outcome {
            Outcome::PlayerWin | Outcome::DealerBust => self.win_bet(amount),
            Outcome::PlayerBust | Outcome::DealerWin => self.lose_bet(amount),
            Outcome::Push => self.push(),
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(DEFAULT_CHIPS)
    }
}
