//! Console blackjack against the dealer.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Console, DEFAULT_CHIPS, GameOptions, GameSession};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Play blackjack against the dealer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Chips to start with.
    #[arg(long, default_value_t = DEFAULT_CHIPS)]
    chips: u64,

    /// Shuffle seed; defaults to the system clock.
    #[arg(long)]
    seed: Option<u64>,

    /// Dealer draws on soft 17 instead of standing.
    #[arg(long)]
    hit_soft_17: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout belongs to the game
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default()
        .with_starting_chips(args.chips)
        .with_stand_on_soft_17(!args.hit_soft_17);

    tracing::info!(seed, chips = args.chips, hit_soft_17 = args.hit_soft_17, "starting session");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let mut session = GameSession::new(options, seed);

    match session.run(&mut console) {
        Ok(summary) => {
            tracing::info!(
                rounds = summary.rounds_played,
                balance = summary.balance,
                "session finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "game aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
