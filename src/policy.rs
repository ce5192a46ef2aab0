//! Turn policies.

use crate::hand::{BLACKJACK, Hand};

/// Largest useful dealer threshold. Hitting on 21 can only bust, so higher
/// thresholds are clamped to this.
pub const MAX_DEALER_STANDS_ABOVE: u8 = (BLACKJACK - 1) as u8;

/// A single turn decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw one more card.
    Hit,
    /// End the turn.
    Stand,
}

/// Decides whether a hand should take another card.
///
/// The game applies a policy per role instead of giving each role its own
/// type.
pub trait Policy {
    /// Chooses the next action for `hand`.
    fn decide(&self, hand: &Hand) -> Decision;
}

/// Fixed-threshold dealer play: hit while the total is at or below
/// `stands_above`, stand once it is higher.
///
/// Soft and hard totals are treated the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerPolicy {
    /// Highest total the dealer still hits on.
    pub stands_above: u8,
}

impl DealerPolicy {
    /// Creates a dealer policy with the given threshold, clamped to
    /// [`MAX_DEALER_STANDS_ABOVE`].
    #[must_use]
    pub const fn new(stands_above: u8) -> Self {
        Self {
            stands_above: clamp_threshold(stands_above),
        }
    }
}

#[must_use]
pub(crate) const fn clamp_threshold(stands_above: u8) -> u8 {
    if stands_above > MAX_DEALER_STANDS_ABOVE {
        MAX_DEALER_STANDS_ABOVE
    } else {
        stands_above
    }
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self::new(17)
    }
}

impl Policy for DealerPolicy {
    fn decide(&self, hand: &Hand) -> Decision {
        if hand.value() <= u16::from(self.stands_above) {
            Decision::Hit
        } else {
            Decision::Stand
        }
    }
}
