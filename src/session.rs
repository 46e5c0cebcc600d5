//! Session loop: plays rounds until the player stops or runs out of chips.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::channel::{Decision, Event, Input, Output};
use crate::deck::Deck;
use crate::error::{BetError, SessionError};
use crate::game::{Round, RoundState};
use crate::ledger::Ledger;
use crate::options::GameOptions;
use crate::result::RoundResult;

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The balance reached zero.
    OutOfChips,
    /// The player declined another round.
    Declined,
    /// The input source closed.
    InputClosed,
}

/// Summary returned by [`GameSession::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds that reached settlement.
    pub rounds_played: u32,
    /// Final balance.
    pub balance: u64,
    /// Why the session stopped.
    pub end: SessionEnd,
}

/// A run of rounds sharing one chip ledger.
///
/// Each round gets a freshly shuffled 52-card deck and new hands; only the
/// ledger carries over.
#[derive(Debug, Clone)]
pub struct GameSession {
    options: GameOptions,
    ledger: Ledger,
    rng: ChaCha8Rng,
    rounds_played: u32,
}

impl GameSession {
    /// Creates a session whose shuffles are driven by `seed`.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            ledger: Ledger::new(options.starting_chips),
            rng: ChaCha8Rng::seed_from_u64(seed),
            rounds_played: 0,
        }
    }

    /// Returns the chip ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of settled rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Plays one round with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// See [`play_round_with`](Self::play_round_with).
    pub fn play_round<T>(&mut self, table: &mut T) -> Result<Option<RoundResult>, SessionError>
    where
        T: Input + Output + ?Sized,
    {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.play_round_with(deck, table)
    }

    /// Plays one round dealing from `deck` as given.
    ///
    /// `table` supplies the player's answers and receives every event.
    /// Returns `None` without asking for a bet when the balance is already
    /// zero, and `None` if the input closed before the round was settled.
    /// The balance is untouched in both cases.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects a step, which only happens when
    /// the deck runs out or the input hands back a bet it should have
    /// rejected. The pending bet is released and the balance is untouched.
    pub fn play_round_with<T>(
        &mut self,
        deck: Deck,
        table: &mut T,
    ) -> Result<Option<RoundResult>, SessionError>
    where
        T: Input + Output + ?Sized,
    {
        if self.ledger.is_broke() {
            return Ok(None);
        }

        let mut round = Round::new(deck, self.options);

        table.render(&Event::Welcome {
            balance: self.ledger.total(),
        });

        let Some(amount) = table.read_bet(self.ledger.total()) else {
            return Ok(None);
        };
        // amounts past i64::MAX are more than any balance can cover
        let amount = i64::try_from(amount).map_err(|_| BetError::InsufficientFunds)?;
        round.place_bet(&mut self.ledger, amount)?;

        let played = self.play_placed(&mut round, table);
        if !matches!(round.state(), RoundState::Settled(_)) {
            // abandoned or failed: drop the pending bet without settling
            self.ledger.push();
        }
        played
    }

    fn play_placed<T>(
        &mut self,
        round: &mut Round,
        table: &mut T,
    ) -> Result<Option<RoundResult>, SessionError>
    where
        T: Input + Output + ?Sized,
    {
        round.deal()?;
        show_table(round, table);

        while round.state() == RoundState::PlayerTurn {
            let Some(decision) = table.read_decision() else {
                return Ok(None);
            };

            match decision {
                Decision::Hit => {
                    let card = round.hit()?;
                    table.render(&Event::PlayerHits {
                        card,
                        value: round.player().value(),
                    });
                    show_table(round, table);
                }
                Decision::Stand => {
                    round.stand()?;
                    table.render(&Event::PlayerStands);
                }
            }
        }

        if round.state() == RoundState::DealerTurn {
            if let Some(&hole) = round.hole_card() {
                table.render(&Event::DealerReveals {
                    hole,
                    value: round.dealer().value(),
                });
            }

            while let Some(card) = round.dealer_hit()? {
                table.render(&Event::DealerDraws {
                    card,
                    value: round.dealer().value(),
                });
            }
        }

        table.render(&Event::Showdown {
            player: round.player(),
            dealer: round.dealer(),
        });

        let result = round.settle(&mut self.ledger)?;
        self.rounds_played += 1;

        table.render(&Event::Outcome(result.outcome));
        table.render(&Event::Balance(result.balance));

        tracing::info!(
            round = self.rounds_played,
            outcome = ?result.outcome,
            bet = result.bet,
            balance = result.balance,
            "round finished"
        );

        Ok(Some(result))
    }

    /// Plays rounds until the balance runs out, the player declines, or the
    /// input closes.
    ///
    /// # Errors
    ///
    /// Returns the first engine error from [`play_round`](Self::play_round).
    pub fn run<T>(&mut self, table: &mut T) -> Result<SessionSummary, SessionError>
    where
        T: Input + Output + ?Sized,
    {
        let end = loop {
            if self.ledger.is_broke() {
                table.render(&Event::OutOfChips);
                break SessionEnd::OutOfChips;
            }

            if self.play_round(table)?.is_none() {
                break SessionEnd::InputClosed;
            }

            if self.ledger.is_broke() {
                continue;
            }

            match table.play_again() {
                Some(true) => {}
                Some(false) => {
                    table.render(&Event::Goodbye);
                    break SessionEnd::Declined;
                }
                None => break SessionEnd::InputClosed,
            }
        };

        tracing::info!(
            rounds = self.rounds_played,
            balance = self.ledger.total(),
            ?end,
            "session over"
        );

        Ok(SessionSummary {
            rounds_played: self.rounds_played,
            balance: self.ledger.total(),
            end,
        })
    }
}

fn show_table<O: Output + ?Sized>(round: &Round, output: &mut O) {
    if let Some(&dealer_up) = round.dealer_up_card() {
        output.render(&Event::Table {
            dealer_up,
            player: round.player(),
        });
    }
}
