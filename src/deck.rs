//! A single 52-card deck.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards, drawn from the front.
///
/// A deck only ever shrinks: every drawn card leaves it for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds all 52 suit/rank combinations and shuffles them.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.shuffle(rng);
        deck
    }

    /// Builds all 52 suit/rank combinations in suit-major order, unshuffled.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Builds a shuffled deck from every card not listed in `in_play`.
    ///
    /// Used to keep a round going after the deck runs dry without duplicating
    /// any card a participant already holds.
    pub fn without<R: Rng + ?Sized>(in_play: &[Card], rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.retain(|card| !in_play.contains(card));
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// No uniqueness check is done; this is meant for stacking a known
    /// sequence.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Shuffles the remaining cards with a forward Fisher–Yates pass.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let len = self.cards.len();
        for i in 0..len {
            let j = rng.random_range(i..len);
            self.cards.swap(i, j);
        }
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterates over the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
