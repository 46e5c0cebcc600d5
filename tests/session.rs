//! Session loop and console adapter tests.

use bjtable::{
    BetError, Card, Console, DealError, Decision, Deck, Event, GameOptions, GameSession, Input,
    Outcome, Output, Rank, SessionEnd, SessionError, Suit,
};

/// Scripted answers, stored back to front, plus a log of every rendered event.
#[derive(Default)]
struct Script {
    bets: Vec<u64>,
    decisions: Vec<Decision>,
    again: Vec<bool>,
    events: Vec<String>,
}

impl Script {
    fn new(bets: &[u64], decisions: &[Decision], again: &[bool]) -> Self {
        Self {
            bets: bets.iter().rev().copied().collect(),
            decisions: decisions.iter().rev().copied().collect(),
            again: again.iter().rev().copied().collect(),
            events: Vec::new(),
        }
    }

    fn saw(&self, prefix: &str) -> bool {
        self.events.iter().any(|e| e.starts_with(prefix))
    }
}

impl Input for Script {
    fn read_bet(&mut self, _balance: u64) -> Option<u64> {
        self.bets.pop()
    }

    fn read_decision(&mut self) -> Option<Decision> {
        self.decisions.pop()
    }

    fn play_again(&mut self) -> Option<bool> {
        self.again.pop()
    }
}

impl Output for Script {
    fn render(&mut self, event: &Event<'_>) {
        self.events.push(format!("{event:?}"));
    }
}

fn deck_from_draws(draws: &[(Suit, Rank)]) -> Deck {
    let mut cards: Vec<Card> = draws.iter().map(|&(s, r)| Card::new(s, r)).collect();
    cards.reverse();
    Deck::from_cards(cards)
}

#[test]
fn stand_then_dealer_draws_to_21() {
    let deck = deck_from_draws(&[
        (Suit::Hearts, Rank::Ten),
        (Suit::Hearts, Rank::Seven),
        (Suit::Clubs, Rank::Six),
        (Suit::Clubs, Rank::King),
        (Suit::Spades, Rank::Five),
    ]);
    let mut session = GameSession::new(GameOptions::default(), 1);
    let mut script = Script::new(&[10], &[Decision::Stand], &[]);

    let result = session
        .play_round_with(deck, &mut script)
        .unwrap()
        .unwrap();

    assert_eq!(result.outcome, Outcome::DealerWin);
    assert_eq!(result.balance, 90);
    assert_eq!(session.ledger().total(), 90);
    assert_eq!(session.rounds_played(), 1);

    assert!(script.saw("Welcome { balance: 100 }"));
    assert!(script.saw("Table"));
    assert!(script.saw("PlayerStands"));
    assert!(script.saw("DealerReveals"));
    assert!(script.saw("DealerDraws"));
    assert!(script.saw("Showdown"));
    assert!(script.saw("Outcome(DealerWin)"));
    assert!(script.saw("Balance(90)"));
}

#[test]
fn hit_into_bust_never_reveals_dealer() {
    let deck = deck_from_draws(&[
        (Suit::Hearts, Rank::King),
        (Suit::Hearts, Rank::Six),
        (Suit::Clubs, Rank::Six),
        (Suit::Clubs, Rank::Ten),
        (Suit::Spades, Rank::Queen),
    ]);
    let mut session = GameSession::new(GameOptions::default(), 1);
    // the second decision must never be asked for
    let mut script = Script::new(&[40], &[Decision::Hit, Decision::Hit], &[]);

    let result = session
        .play_round_with(deck, &mut script)
        .unwrap()
        .unwrap();

    assert_eq!(result.outcome, Outcome::PlayerBust);
    assert_eq!(session.ledger().total(), 60);
    assert_eq!(script.decisions.len(), 1);
    assert!(script.saw("PlayerHits"));
    assert!(!script.saw("DealerReveals"));
    assert!(!script.saw("DealerDraws"));
    assert!(script.saw("Outcome(PlayerBust)"));
}

#[test]
fn closed_input_mid_round_keeps_balance() {
    let mut session = GameSession::new(GameOptions::default(), 5);
    let mut script = Script::new(&[30], &[], &[]);

    assert_eq!(session.play_round(&mut script).unwrap(), None);
    assert_eq!(session.ledger().total(), 100);
    assert_eq!(session.ledger().bet(), 0);
    assert_eq!(session.rounds_played(), 0);
}

#[test]
fn failed_deal_releases_the_bet() {
    let deck = deck_from_draws(&[(Suit::Hearts, Rank::Ten), (Suit::Clubs, Rank::Two)]);
    let mut session = GameSession::new(GameOptions::default(), 5);
    let mut script = Script::new(&[30], &[Decision::Stand], &[]);

    assert_eq!(
        session.play_round_with(deck, &mut script),
        Err(SessionError::Deal(DealError::EmptyDeck))
    );
    assert_eq!(session.ledger().total(), 100);
    assert_eq!(session.ledger().bet(), 0);
    assert_eq!(session.rounds_played(), 0);
}

#[test]
fn oversized_bet_is_insufficient_funds() {
    let mut session = GameSession::new(GameOptions::default(), 5);
    let mut script = Script::new(&[u64::MAX], &[], &[]);

    assert_eq!(
        session.play_round(&mut script),
        Err(SessionError::Bet(BetError::InsufficientFunds))
    );
    assert_eq!(session.ledger().total(), 100);
    assert_eq!(session.ledger().bet(), 0);
}

#[test]
fn broke_session_does_not_ask_for_a_bet() {
    let mut session = GameSession::new(GameOptions::default().with_starting_chips(0), 5);
    let mut script = Script::new(&[10], &[], &[]);

    assert_eq!(session.play_round(&mut script).unwrap(), None);
    assert_eq!(script.bets.len(), 1);
    assert!(script.events.is_empty());
}

#[test]
fn run_stops_when_player_declines() {
    let mut session = GameSession::new(GameOptions::default(), 42);
    let mut script = Script::new(&[5, 5], &[Decision::Stand, Decision::Stand], &[true, false]);

    let summary = session.run(&mut script).unwrap();

    assert_eq!(summary.end, SessionEnd::Declined);
    assert_eq!(summary.rounds_played, 2);
    assert_eq!(summary.balance, session.ledger().total());
    assert!(script.saw("Goodbye"));
}

#[test]
fn run_stops_when_input_closes() {
    let mut session = GameSession::new(GameOptions::default(), 42);
    let mut script = Script::default();

    let summary = session.run(&mut script).unwrap();

    assert_eq!(summary.end, SessionEnd::InputClosed);
    assert_eq!(summary.rounds_played, 0);
    assert_eq!(summary.balance, 100);
}

#[test]
fn run_stops_when_out_of_chips() {
    let deck = deck_from_draws(&[
        (Suit::Hearts, Rank::Ten),
        (Suit::Hearts, Rank::Nine),
        (Suit::Clubs, Rank::King),
        (Suit::Clubs, Rank::Queen),
    ]);
    let mut session = GameSession::new(GameOptions::default().with_starting_chips(20), 3);
    let mut script = Script::new(&[20], &[Decision::Stand], &[true]);

    let result = session
        .play_round_with(deck, &mut script)
        .unwrap()
        .unwrap();
    assert_eq!(result.outcome, Outcome::DealerWin);
    assert!(session.ledger().is_broke());

    let summary = session.run(&mut script).unwrap();
    assert_eq!(summary.end, SessionEnd::OutOfChips);
    assert_eq!(summary.rounds_played, 1);
    assert_eq!(summary.balance, 0);
    assert!(script.saw("OutOfChips"));
    // never asked to continue
    assert_eq!(script.again.len(), 1);
}

#[test]
fn broke_from_the_start() {
    let mut session = GameSession::new(GameOptions::default().with_starting_chips(0), 3);
    let mut script = Script::new(&[10], &[], &[]);

    let summary = session.run(&mut script).unwrap();
    assert_eq!(summary.end, SessionEnd::OutOfChips);
    assert_eq!(summary.rounds_played, 0);
    assert_eq!(script.bets.len(), 1);
}

fn console(input: &str) -> Console<&[u8], Vec<u8>> {
    Console::new(input.as_bytes(), Vec::new())
}

fn written(console: Console<&[u8], Vec<u8>>) -> String {
    String::from_utf8(console.into_writer()).unwrap()
}

#[test]
fn console_reprompts_until_bet_is_valid() {
    let mut console = console("abc\n0\n-5\n500\n25\n");

    assert_eq!(console.read_bet(100), Some(25));

    let out = written(console);
    assert!(out.contains("Please enter a whole number."));
    assert!(out.contains("The bet must be a positive number."));
    assert!(out.contains("Not enough chips. You have 100 available."));
    assert_eq!(out.matches("How many chips do you bet (1-100)?").count(), 5);
}

#[test]
fn console_reads_decisions_case_insensitively() {
    let mut console = console("x\nH\n stand\nS\n");

    assert_eq!(console.read_decision(), Some(Decision::Hit));
    assert_eq!(console.read_decision(), Some(Decision::Stand));

    let out = written(console);
    assert_eq!(out.matches("Invalid choice").count(), 2);
}

#[test]
fn console_end_of_input() {
    let mut console = console("");
    assert_eq!(console.read_bet(100), None);
    assert_eq!(console.read_decision(), None);
    assert_eq!(console.play_again(), None);
}

#[test]
fn console_play_again() {
    let mut console = console("Y\nyes\nn\nmaybe\n");
    assert_eq!(console.play_again(), Some(true));
    assert_eq!(console.play_again(), Some(true));
    assert_eq!(console.play_again(), Some(false));
    assert_eq!(console.play_again(), Some(false));
}

#[test]
fn console_hides_hole_card_until_showdown() {
    let deck = deck_from_draws(&[
        (Suit::Hearts, Rank::King),
        (Suit::Hearts, Rank::Queen),
        (Suit::Clubs, Rank::Nine),
        (Suit::Clubs, Rank::Seven),
        (Suit::Spades, Rank::Eight),
    ]);
    let mut session = GameSession::new(GameOptions::default(), 1);
    let mut console = console("50\ns\n");

    let result = session
        .play_round_with(deck, &mut console)
        .unwrap()
        .unwrap();
    assert_eq!(result.outcome, Outcome::DealerBust);
    assert_eq!(result.balance, 150);

    let out = written(console);
    let table = out.find("[?]\n  7♣").unwrap();
    let reveal = out.find("Dealer reveals 9♣ (total 16).").unwrap();
    assert!(table < reveal);
    assert!(out.contains("Dealer draws 8♠ (total 24)."));
    assert!(out.contains("Dealer total: 24"));
    assert!(out.contains("Your total: 20"));
    assert!(out.contains("Dealer busts! You win."));
    assert!(out.contains("Balance: 150 chips"));
}

#[test]
fn console_session_until_goodbye() {
    let mut session = GameSession::new(GameOptions::default(), 11);
    let mut console = console("10\ns\nn\n");

    let summary = session.run(&mut console).unwrap();
    assert_eq!(summary.end, SessionEnd::Declined);
    assert_eq!(summary.rounds_played, 1);

    let out = written(console);
    assert!(out.contains("WELCOME TO BLACKJACK"));
    assert!(out.contains("Thanks for playing!"));
}
