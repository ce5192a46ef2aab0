//! Console blackjack against an automated dealer.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use solo_blackjack::{
    Console, EmptyDeckPolicy, Game, GameOptions, Prompt, ReplayFallback, Session, TableEvent,
};

#[derive(Parser)]
#[command(
    name = "solo-blackjack",
    about = "Play blackjack against the dealer: 1 to hit, 2 to stand"
)]
struct Args {
    /// Shuffle seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Dealer keeps hitting while at or below this total (at most 20)
    #[arg(long, default_value_t = 17)]
    dealer_stands_above: u8,

    /// Quit instead of asking again when the replay answer is invalid
    #[arg(long, default_value_t = false)]
    decline_invalid_replay: bool,

    /// What to do when the deck runs out mid-round
    #[arg(long, value_enum, default_value_t = EmptyDeck::Reshuffle)]
    empty_deck: EmptyDeck,
}

#[derive(Clone, Copy, ValueEnum)]
enum EmptyDeck {
    /// Rebuild the deck from unheld cards
    Reshuffle,
    /// End the round as a draw
    Push,
}

impl From<EmptyDeck> for EmptyDeckPolicy {
    fn from(value: EmptyDeck) -> Self {
        match value {
            EmptyDeck::Reshuffle => Self::Reshuffle,
            EmptyDeck::Push => Self::Push,
        }
    }
}

struct Terminal<R> {
    input: R,
}

impl<R: BufRead> Terminal<R> {
    /// Reads one line. A line that is not valid UTF-8 comes back empty so it
    /// is rejected like any other bad answer.
    fn read_answer(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => Some(String::new()),
            Err(err) => {
                log::warn!("stdin read failed: {err}");
                None
            }
        }
    }
}

impl<R: BufRead> Console for Terminal<R> {
    fn prompt(&mut self, prompt: Prompt) -> Option<String> {
        match prompt {
            Prompt::TurnDecision => println!("Hit (1) or stand (2):"),
            Prompt::Replay => println!("Play again? Restart: 1, Quit: 2"),
        }
        let _ = io::stdout().flush();

        self.read_answer()
    }

    fn show(&mut self, event: &TableEvent) {
        match event {
            TableEvent::PlayerCard { ordinal: 1, card } => println!("Player's first card: {card}"),
            TableEvent::PlayerCard { card, .. } => println!("Player's second card: {card}"),
            TableEvent::DealerUpCard(card) => println!("Dealer's first card: {card}"),
            TableEvent::DealerHoleCard => println!("Dealer's second card: hidden\n"),
            TableEvent::PlayerDrew(card) => println!("Player draws {card}"),
            TableEvent::PlayerTotal(total) => println!("Player's current total: {total}"),
            TableEvent::PlayerBust(_) => println!("Player's total is over 21!\n"),
            TableEvent::DealerTotal(total) => println!("Dealer's current total: {total}"),
            TableEvent::DealerThinking => println!("\nDealer is choosing . . .\n"),
            TableEvent::DeckRebuilt { remaining } => {
                println!("The deck ran out and was reshuffled ({remaining} cards).");
            }
            TableEvent::FinalTotals { player, dealer } => {
                println!("\nPlayer's final total: {player}");
                println!("Dealer's final total: {dealer}\n");
            }
            TableEvent::Outcome(outcome) => println!("{outcome}"),
            TableEvent::InvalidInput { error, .. } => println!("Invalid input: {error}."),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("shuffle seed {seed}");

    let fallback = if args.decline_invalid_replay {
        ReplayFallback::Decline
    } else {
        ReplayFallback::Reprompt
    };
    let options = GameOptions::default()
        .with_dealer_stands_above(args.dealer_stands_above)
        .with_invalid_replay(fallback)
        .with_empty_deck(args.empty_deck.into());

    let mut session = Session::new(Game::new(options, seed));
    let mut terminal = Terminal {
        input: io::stdin().lock(),
    };

    match session.run(&mut terminal) {
        Ok(results) => {
            log::info!("played {} round(s)", results.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("game aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
