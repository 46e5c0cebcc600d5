//! A single-player blackjack engine with optional `no_std` support.
//!
//! A [`Round`] runs one hand against the dealer: betting, the initial deal,
//! the player's hits and stands, the dealer's fixed draw-to-17 strategy, and
//! settlement against a chip [`Ledger`]. A [`GameSession`] strings rounds
//! together and talks to the player through the [`Input`] and [`Output`]
//! traits; the `std` feature ships a line-based [`Console`] for them.
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{Console, GameOptions, GameSession};
//!
//! let stdin = std::io::stdin();
//! let mut console = Console::new(stdin.lock(), std::io::stdout());
//! let mut session = GameSession::new(GameOptions::default(), 42);
//! let summary = session.run(&mut console).unwrap();
//! let _ = summary;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod channel;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use channel::{Decision, Event, Input, Output};
#[cfg(feature = "std")]
pub use console::Console;
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, EmptyDeck, SessionError, SettleError};
pub use game::{Round, RoundState, resolve};
pub use hand::{BLACKJACK, Hand};
pub use ledger::{DEFAULT_CHIPS, Ledger, check_bet, parse_bet};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
pub use session::{GameSession, SessionEnd, SessionSummary};
