//! Game configuration options.

use crate::policy::clamp_threshold;

/// What to do when the replay prompt receives something other than 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReplayFallback {
    /// Report the bad input and ask again, like the turn prompt does.
    #[default]
    Reprompt,
    /// Report the bad input once and end the session.
    Decline,
}

/// What to do when a participant must draw from an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmptyDeckPolicy {
    /// Rebuild a shuffled deck from every card not currently held and keep
    /// playing.
    #[default]
    Reshuffle,
    /// End the round on the spot as a draw.
    Push,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use solo_blackjack::{EmptyDeckPolicy, GameOptions};
///
/// let options = GameOptions::default()
///     .with_dealer_stands_above(16)
///     .with_empty_deck(EmptyDeckPolicy::Push);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Dealer keeps hitting while their total is at or below this value.
    pub dealer_stands_above: u8,
    /// Handling of invalid answers to the replay prompt.
    pub invalid_replay: ReplayFallback,
    /// Handling of draws from an exhausted deck.
    pub empty_deck: EmptyDeckPolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_above: 17,
            invalid_replay: ReplayFallback::Reprompt,
            empty_deck: EmptyDeckPolicy::Reshuffle,
        }
    }
}

impl GameOptions {
    /// Sets the dealer's hitting threshold.
    ///
    /// Values above [`MAX_DEALER_STANDS_ABOVE`](crate::MAX_DEALER_STANDS_ABOVE)
    /// are clamped to it.
    ///
    /// # Example
    ///
    /// ```
    /// use solo_blackjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_above(16);
    /// assert_eq!(options.dealer_stands_above, 16);
    ///
    /// let options = GameOptions::default().with_dealer_stands_above(30);
    /// assert_eq!(options.dealer_stands_above, 20);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_above(mut self, total: u8) -> Self {
        self.dealer_stands_above = clamp_threshold(total);
        self
    }

    /// Sets how invalid replay answers are handled.
    ///
    /// # Example
    ///
    /// ```
    /// use solo_blackjack::{GameOptions, ReplayFallback};
    ///
    /// let options = GameOptions::default().with_invalid_replay(ReplayFallback::Decline);
    /// assert_eq!(options.invalid_replay, ReplayFallback::Decline);
    /// ```
    #[must_use]
    pub const fn with_invalid_replay(mut self, fallback: ReplayFallback) -> Self {
        self.invalid_replay = fallback;
        self
    }

    /// Sets how an exhausted deck is handled.
    ///
    /// # Example
    ///
    /// ```
    /// use solo_blackjack::{EmptyDeckPolicy, GameOptions};
    ///
    /// let options = GameOptions::default().with_empty_deck(EmptyDeckPolicy::Push);
    /// assert_eq!(options.empty_deck, EmptyDeckPolicy::Push);
    /// ```
    #[must_use]
    pub const fn with_empty_deck(mut self, policy: EmptyDeckPolicy) -> Self {
        self.empty_deck = policy;
        self
    }
}
