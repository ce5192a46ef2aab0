//! Game state types.

use crate::card::Card;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Fresh deck and empty hands; waiting for the initial deal.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and can be settled.
    RoundOver,
}

/// The four cards of the initial deal.
///
/// Kept only for announcing the deal; the hands stay authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningDeal {
    /// Player's first and second card.
    pub player: [Card; 2],
    /// Dealer's face-up card.
    pub dealer_up: Card,
    /// Dealer's face-down card.
    pub dealer_hole: Card,
}
