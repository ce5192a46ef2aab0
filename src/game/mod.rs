//! Game engine and state management.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, DeckError};
use crate::options::{EmptyDeckPolicy, GameOptions};
use crate::participant::{Participant, Role};

mod actions;
mod dealer;
pub mod state;

pub use state::{GameState, OpeningDeal};

/// A single-player blackjack round controller.
///
/// The game owns the deck, both participants, and the random source used for
/// every shuffle. One `Game` is reused across rounds via [`Game::new_round`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to draw this round.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    player: Participant,
    dealer: Participant,
    state: GameState,
    deck_exhausted: bool,
    deck_rebuilds: u32,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The seed drives every shuffle for the lifetime of the game.
    ///
    /// # Example
    ///
    /// ```
    /// use solo_blackjack::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Dealing);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(&mut rng);

        Self {
            deck,
            options,
            player: Participant::new(Role::Player),
            dealer: Participant::new(Role::Dealer),
            state: GameState::Dealing,
            deck_exhausted: false,
            deck_rebuilds: 0,
            rng,
        }
    }

    /// Throws away the current round and starts over with a freshly shuffled
    /// deck and empty hands.
    pub fn new_round(&mut self) {
        self.deck = Deck::new(&mut self.rng);
        self.player = Participant::new(Role::Player);
        self.dealer = Participant::new(Role::Dealer);
        self.state = GameState::Dealing;
        self.deck_exhausted = false;
        self.deck_rebuilds = 0;
        log::debug!("new round, deck shuffled");
    }

    /// Deals two cards to the player, then two to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealing state, or if the
    /// deck runs out under [`EmptyDeckPolicy::Push`] (the round is then over).
    pub fn deal(&mut self) -> Result<OpeningDeal, DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        let no_cards = |_: DeckError| DealError::NotEnoughCards;
        let first = self.draw_for(Role::Player).map_err(no_cards)?;
        let second = self.draw_for(Role::Player).map_err(no_cards)?;
        let dealer_up = self.draw_for(Role::Dealer).map_err(no_cards)?;
        let dealer_hole = self.draw_for(Role::Dealer).map_err(no_cards)?;

        self.state = GameState::PlayerTurn;

        Ok(OpeningDeal {
            player: [first, second],
            dealer_up,
            dealer_hole,
        })
    }

    /// Draws one card for `role`, applying the empty-deck policy.
    fn draw_for(&mut self, role: Role) -> Result<Card, DeckError> {
        if self.deck.is_empty() && self.options.empty_deck == EmptyDeckPolicy::Reshuffle {
            self.rebuild_deck();
        }

        let drawn = self.seat_draw(role);
        if drawn.is_err() {
            log::warn!("deck exhausted, round ends as a push");
            self.deck_exhausted = true;
            self.state = GameState::RoundOver;
        }
        drawn
    }

    fn seat_draw(&mut self, role: Role) -> Result<Card, DeckError> {
        let seat = match role {
            Role::Player => &mut self.player,
            Role::Dealer => &mut self.dealer,
        };
        seat.draw_from(&mut self.deck)
    }

    /// Leaves the deck untouched when every card is already held.
    fn rebuild_deck(&mut self) {
        let in_play: Vec<Card> = self
            .player
            .hand()
            .cards()
            .iter()
            .chain(self.dealer.hand().cards())
            .copied()
            .collect();

        let deck = Deck::without(&in_play, &mut self.rng);
        if deck.is_empty() {
            return;
        }

        self.deck = deck;
        self.deck_rebuilds += 1;
        log::warn!(
            "deck exhausted, rebuilt from {} unheld cards",
            self.deck.len()
        );
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns how many times the deck was rebuilt this round.
    #[must_use]
    pub const fn deck_rebuilds(&self) -> u32 {
        self.deck_rebuilds
    }

    /// Returns whether the round was cut short by an empty deck.
    #[must_use]
    pub const fn is_deck_exhausted(&self) -> bool {
        self.deck_exhausted
    }
}
