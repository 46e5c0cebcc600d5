//! Round outcome types.

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21; the dealer never played.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer finished with the higher total.
    DealerWin,
    /// Player finished with the higher total.
    PlayerWin,
    /// Equal totals; the bet is returned.
    Push,
}

impl Outcome {
    /// Returns whether the player collects the bet.
    #[must_use]
    pub const fn player_wins(self) -> bool {
        matches!(self, Self::PlayerWin | Self::DealerBust)
    }

    /// Returns whether the player forfeits the bet.
    #[must_use]
    pub const fn player_loses(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerWin)
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The amount that was wagered.
    pub bet: u64,
    /// The player's final hand value.
    pub player_value: u16,
    /// The dealer's final hand value.
    pub dealer_value: u16,
    /// The balance after settlement.
    pub balance: u64,
}
