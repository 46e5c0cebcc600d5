//! Line-based console front end.
//!
//! [`Console`] reads answers from any [`BufRead`] and writes the table to any
//! [`Write`], so the same code drives a terminal or an in-memory test.

use std::io::{BufRead, Write};

use crate::channel::{Decision, Event, Input, Output};
use crate::error::BetError;
use crate::hand::Hand;
use crate::ledger::parse_bet;
use crate::result::Outcome;

const RULE: &str = "========================================";

/// Console adapter implementing both [`Input`] and [`Output`].
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    #[must_use]
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console and returns the writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn emit(&mut self, text: &str) {
        let result = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush());
        if let Err(err) = result {
            tracing::warn!(%err, "failed to write to console");
        }
    }

    fn prompt(&mut self, prompt: &str) -> Option<String> {
        self.emit(prompt);

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_lowercase()),
            Err(err) => {
                tracing::warn!(%err, "failed to read from console");
                None
            }
        }
    }
}

fn bet_error_message(err: BetError, balance: u64) -> String {
    match err {
        BetError::NotAnInteger => "Please enter a whole number.\n".to_string(),
        BetError::InsufficientFunds => {
            format!("Not enough chips. You have {balance} available.\n")
        }
        BetError::NonPositiveBet => "The bet must be a positive number.\n".to_string(),
        BetError::InvalidState => format!("{err}.\n"),
    }
}

fn format_cards(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(|card| format!("  {card}\n"))
        .collect()
}

const fn outcome_banner(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBust => "BUST! You went over 21.",
        Outcome::DealerBust => "Dealer busts! You win.",
        Outcome::DealerWin => "Dealer wins.",
        Outcome::PlayerWin => "You win!",
        Outcome::Push => "Push. Your bet is returned.",
    }
}

fn render_event(event: &Event<'_>) -> String {
    match event {
        Event::Welcome { balance } => format!(
            "\n{RULE}\nWELCOME TO BLACKJACK\n{RULE}\n\
             - Get closer to 21 than the dealer without going over\n\
             - Cards 2-10 are worth their face value\n\
             - Jack, Queen and King are worth 10\n\
             - Aces are worth 11 or 1\n\
             - The dealer draws until reaching at least 17\n\
             {RULE}\nBalance: {balance} chips\n"
        ),
        Event::Table { dealer_up, player } => format!(
            "\nDealer's hand:\n  [?]\n  {dealer_up}\n\nYour hand:\n{}Total: {}\n",
            format_cards(player),
            player.value()
        ),
        Event::PlayerHits { card, value } => format!("\nYou draw {card} (total {value}).\n"),
        Event::PlayerStands => "\nYou stand. Dealer's turn.\n".to_string(),
        Event::DealerReveals { hole, value } => {
            format!("\nDealer reveals {hole} (total {value}).\n")
        }
        Event::DealerDraws { card, value } => format!("Dealer draws {card} (total {value}).\n"),
        Event::Showdown { player, dealer } => format!(
            "\n{RULE}\nRESULT\n{RULE}\nDealer's hand:\n{}Dealer total: {}\n\nYour hand:\n{}Your total: {}\n{RULE}\n",
            format_cards(dealer),
            dealer.value(),
            format_cards(player),
            player.value()
        ),
        Event::Outcome(outcome) => format!("\n{}\n", outcome_banner(*outcome)),
        Event::Balance(balance) => format!("Balance: {balance} chips\n"),
        Event::OutOfChips => "\nGame over: you are out of chips.\n".to_string(),
        Event::Goodbye => "\nThanks for playing!\n".to_string(),
    }
}

impl<R: BufRead, W: Write> Input for Console<R, W> {
    fn read_bet(&mut self, balance: u64) -> Option<u64> {
        loop {
            let line = self.prompt(&format!("How many chips do you bet (1-{balance})? "))?;
            match parse_bet(&line, balance) {
                Ok(bet) => return Some(bet),
                Err(err) => {
                    tracing::debug!(input = %line, %err, "bet rejected");
                    self.emit(&bet_error_message(err, balance));
                }
            }
        }
    }

    fn read_decision(&mut self) -> Option<Decision> {
        loop {
            match self.prompt("Hit or stand? Enter h or s: ")?.as_str() {
                "h" => return Some(Decision::Hit),
                "s" => return Some(Decision::Stand),
                _ => self.emit("Invalid choice. Please enter \"h\" or \"s\".\n"),
            }
        }
    }

    fn play_again(&mut self) -> Option<bool> {
        let answer = self.prompt("Play another round? (y/n): ")?;
        Some(matches!(answer.as_str(), "y" | "yes"))
    }
}

impl<R: BufRead, W: Write> Output for Console<R, W> {
    fn render(&mut self, event: &Event<'_>) {
        self.emit(&render_event(event));
    }
}
