//! Table participants.

use core::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;

/// Which seat a participant occupies.
///
/// Both roles share the same capabilities; only the turn policy applied by
/// the [`Game`](crate::Game) differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The human player.
    Player,
    /// The automated dealer.
    Dealer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("Player"),
            Self::Dealer => f.write_str("Dealer"),
        }
    }
}

/// Someone seated at the table who owns a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    role: Role,
    hand: Hand,
}

impl Participant {
    /// Seats a participant with an empty hand.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            hand: Hand::new(),
        }
    }

    /// Draws the front card of `deck` into this participant's hand.
    ///
    /// The returned card is a copy for display; the hand is the source of
    /// truth.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards left. The hand is
    /// left untouched.
    pub fn draw_from(&mut self, deck: &mut Deck) -> Result<Card, DeckError> {
        let card = deck.draw()?;
        self.hand.add_card(card);
        log::debug!("{} draws {card} (total {})", self.role, self.hand.value());
        Ok(card)
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Shorthand for `self.hand().value()`.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.hand.value()
    }
}
