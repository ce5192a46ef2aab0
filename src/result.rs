//! Round result types for showdown.

use core::fmt;

use crate::hand::BLACKJACK;
use crate::participant::Role;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21; the dealer wins without playing.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Equal totals, or a round cut short by an exhausted deck.
    Draw,
    /// Player's total is higher.
    PlayerWins,
    /// Dealer's total is higher.
    DealerWins,
}

impl Outcome {
    /// Compares final totals. The first matching rule wins: player bust,
    /// dealer bust, equal totals, higher total.
    #[must_use]
    pub const fn compare(player: u16, dealer: u16) -> Self {
        if player > BLACKJACK {
            Self::PlayerBust
        } else if dealer > BLACKJACK {
            Self::DealerBust
        } else if player == dealer {
            Self::Draw
        } else if player > dealer {
            Self::PlayerWins
        } else {
            Self::DealerWins
        }
    }

    /// Returns the winning side, or `None` on a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Role> {
        match self {
            Self::PlayerBust | Self::DealerWins => Some(Role::Dealer),
            Self::DealerBust | Self::PlayerWins => Some(Role::Player),
            Self::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::PlayerBust => "Dealer wins (player bust).",
            Self::DealerBust => "Player wins (dealer bust).",
            Self::Draw => "Draw.",
            Self::PlayerWins => "Player wins.",
            Self::DealerWins => "Dealer wins.",
        };
        f.write_str(text)
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u16,
    /// The dealer's final hand value.
    pub dealer_value: u16,
    /// Whether the round was cut short because the deck ran out.
    pub deck_exhausted: bool,
}
