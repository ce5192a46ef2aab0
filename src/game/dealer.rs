extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::participant::Role;
use crate::policy::{DealerPolicy, Decision, Policy};
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand with the configured threshold policy.
    ///
    /// The dealer draws while their total is at or below
    /// [`GameOptions::dealer_stands_above`](crate::GameOptions::dealer_stands_above).
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        let policy = DealerPolicy::new(self.options.dealer_stands_above);
        self.dealer_play_with(&policy)
    }

    /// Dealer plays their hand following `policy`.
    ///
    /// No player input is consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play_with<P: Policy + ?Sized>(
        &mut self,
        policy: &P,
    ) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        while policy.decide(self.dealer.hand()) == Decision::Hit {
            let card = self
                .draw_for(Role::Dealer)
                .map_err(|_| ShowdownError::NoCards)?;
            drawn_cards.push(card);
        }

        log::debug!("dealer stands on {}", self.dealer.total());
        self.state = GameState::RoundOver;

        Ok(drawn_cards)
    }

    /// Compares both hands and settles the round.
    ///
    /// A round cut short by an exhausted deck is always a draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let player_value = self.player.total();
        let dealer_value = self.dealer.total();
        let outcome = if self.deck_exhausted {
            Outcome::Draw
        } else {
            Outcome::compare(player_value, dealer_value)
        };

        log::info!("round over: player {player_value}, dealer {dealer_value}: {outcome}");

        Ok(RoundResult {
            outcome,
            player_value,
            dealer_value,
            deck_exhausted: self.deck_exhausted,
        })
    }
}
