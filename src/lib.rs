//! A single-player blackjack rule engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time against
//! an automated dealer, and a [`Session`] that drives rounds through a
//! [`Console`] until the player quits.
//!
//! # Example
//!
//! ```
//! use solo_blackjack::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let opening = game.deal().unwrap();
//! assert_eq!(game.player().hand().cards(), &opening.player);
//! assert_eq!(game.state(), GameState::PlayerTurn);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod policy;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError, InputError, PlayError, ShowdownError};
pub use game::{Game, GameState, OpeningDeal};
pub use hand::{BLACKJACK, Hand, total_value};
pub use options::{EmptyDeckPolicy, GameOptions, ReplayFallback};
pub use participant::{Participant, Role};
pub use policy::{DealerPolicy, Decision, MAX_DEALER_STANDS_ABOVE, Policy};
pub use result::{Outcome, RoundResult};
pub use session::{Console, Prompt, ReplayChoice, Session, TableEvent, TurnChoice};
