use crate::card::Card;
use crate::error::ActionError;
use crate::participant::Role;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round immediately; the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, or the deck
    /// is empty under [`EmptyDeckPolicy::Push`](crate::EmptyDeckPolicy::Push).
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self
            .draw_for(Role::Player)
            .map_err(|_| ActionError::NoCards)?;

        if self.player.hand().is_bust() {
            log::debug!("player busts with {}", self.player.total());
            self.state = GameState::RoundOver;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        log::debug!("player stands on {}", self.player.total());
        self.state = GameState::DealerTurn;

        Ok(())
    }
}
