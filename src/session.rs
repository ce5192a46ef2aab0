//! The interactive round loop.
//!
//! A [`Session`] drives a [`Game`] from the initial deal through the replay
//! decision. All input and output goes through a [`Console`], so the loop
//! itself never touches stdin or stdout.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::card::Card;
use crate::error::{ActionError, DealError, InputError, PlayError, ShowdownError};
use crate::game::{Game, GameState};
use crate::hand::total_value;
use crate::options::ReplayFallback;
use crate::result::{Outcome, RoundResult};

/// The two questions a session asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prompt {
    /// Hit (1) or stand (2).
    TurnDecision,
    /// Play again (1) or quit (2).
    Replay,
}

/// Something the session wants shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// One of the player's two opening cards; `ordinal` is 1 or 2.
    PlayerCard {
        /// Position in the deal.
        ordinal: u8,
        /// The card.
        card: Card,
    },
    /// The dealer's face-up card.
    DealerUpCard(Card),
    /// The dealer's face-down card was dealt but stays hidden.
    DealerHoleCard,
    /// The player drew a card after choosing to hit.
    PlayerDrew(Card),
    /// The player's running total before a decision.
    PlayerTotal(u16),
    /// The player went over 21.
    PlayerBust(u16),
    /// The dealer's running total.
    DealerTotal(u16),
    /// The dealer is about to draw.
    DealerThinking,
    /// The deck ran dry and was rebuilt from unheld cards.
    DeckRebuilt {
        /// Cards in the rebuilt deck.
        remaining: usize,
    },
    /// Both final totals.
    FinalTotals {
        /// Player's total.
        player: u16,
        /// Dealer's total.
        dealer: u16,
    },
    /// How the round ended.
    Outcome(Outcome),
    /// A line was rejected.
    InvalidInput {
        /// The prompt that was being answered.
        prompt: Prompt,
        /// Why the line was rejected.
        error: InputError,
    },
}

/// The outside world as seen by a session.
pub trait Console {
    /// Asks `prompt` and blocks until a line is available.
    ///
    /// Returns `None` once input is closed; the session then stops.
    fn prompt(&mut self, prompt: Prompt) -> Option<String>;

    /// Displays an event.
    fn show(&mut self, event: &TableEvent);
}

/// Answer to [`Prompt::TurnDecision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnChoice {
    /// `1`: draw a card.
    Hit,
    /// `2`: end the turn.
    Stand,
}

/// Answer to [`Prompt::Replay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayChoice {
    /// `1`: start a fresh round.
    Replay,
    /// `2`: stop playing.
    Quit,
}

fn parse_one_or_two(line: &str) -> Result<bool, InputError> {
    match line.trim().parse::<i64>() {
        Ok(1) => Ok(true),
        Ok(2) => Ok(false),
        Ok(other) => Err(InputError::OutOfRange(other)),
        Err(_) => Err(InputError::NotANumber),
    }
}

impl FromStr for TurnChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if parse_one_or_two(s)? {
            Self::Hit
        } else {
            Self::Stand
        })
    }
}

impl FromStr for ReplayChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if parse_one_or_two(s)? {
            Self::Replay
        } else {
            Self::Quit
        })
    }
}

/// Plays rounds until the user quits or input runs out.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
}

impl Session {
    /// Wraps a game. The first round uses the game's current deck.
    #[must_use]
    pub const fn new(game: Game) -> Self {
        Self { game }
    }

    /// Returns the underlying game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Runs rounds back to back, returning the result of each completed one.
    ///
    /// Every replay starts from a fresh deck and empty hands.
    ///
    /// # Errors
    ///
    /// Returns an error only if the game rejects a step the session drives,
    /// which means the state machine was misused.
    pub fn run<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<Vec<RoundResult>, PlayError> {
        if self.game.state() != GameState::Dealing {
            self.game.new_round();
        }

        let mut results = Vec::new();

        loop {
            let Some(result) = self.play_round(console)? else {
                log::debug!("input closed mid-round");
                break;
            };
            results.push(result);

            if self.ask_replay(console) == ReplayChoice::Quit {
                break;
            }
            self.game.new_round();
        }

        Ok(results)
    }

    /// Plays one round. `None` means input closed during the player's turn.
    fn play_round<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<Option<RoundResult>, PlayError> {
        let rebuilds = self.game.deck_rebuilds();
        match self.game.deal() {
            Ok(opening) => {
                for (ordinal, card) in (1..).zip(opening.player) {
                    console.show(&TableEvent::PlayerCard { ordinal, card });
                }
                console.show(&TableEvent::DealerUpCard(opening.dealer_up));
                console.show(&TableEvent::DealerHoleCard);
            }
            Err(DealError::NotEnoughCards) => {}
            Err(err) => return Err(err.into()),
        }
        self.report_rebuilds(console, rebuilds);

        while self.game.state() == GameState::PlayerTurn {
            console.show(&TableEvent::PlayerTotal(self.game.player().total()));

            let Some(line) = console.prompt(Prompt::TurnDecision) else {
                return Ok(None);
            };

            match line.parse::<TurnChoice>() {
                Ok(TurnChoice::Hit) => {
                    let rebuilds = self.game.deck_rebuilds();
                    match self.game.hit() {
                        Ok(card) => console.show(&TableEvent::PlayerDrew(card)),
                        Err(ActionError::NoCards) => {}
                        Err(err) => return Err(err.into()),
                    }
                    self.report_rebuilds(console, rebuilds);
                }
                Ok(TurnChoice::Stand) => self.game.stand()?,
                Err(error) => console.show(&TableEvent::InvalidInput {
                    prompt: Prompt::TurnDecision,
                    error,
                }),
            }
        }

        let player = self.game.player().hand();
        if player.is_bust() {
            console.show(&TableEvent::PlayerTotal(player.value()));
            console.show(&TableEvent::PlayerBust(player.value()));
        }

        if self.game.state() == GameState::DealerTurn {
            let rebuilds = self.game.deck_rebuilds();
            match self.game.dealer_play() {
                Ok(_) | Err(ShowdownError::NoCards) => {}
                Err(err) => return Err(err.into()),
            }
            self.report_dealer_turn(console);
            self.report_rebuilds(console, rebuilds);
        }

        let result = self.game.showdown()?;
        console.show(&TableEvent::FinalTotals {
            player: result.player_value,
            dealer: result.dealer_value,
        });
        console.show(&TableEvent::Outcome(result.outcome));

        Ok(Some(result))
    }

    /// Replays the dealer's turn as running totals, one per card held.
    fn report_dealer_turn<C: Console + ?Sized>(&self, console: &mut C) {
        let cards = self.game.dealer().hand().cards();
        for held in 2..=cards.len() {
            console.show(&TableEvent::DealerTotal(total_value(&cards[..held])));
            if held < cards.len() {
                console.show(&TableEvent::DealerThinking);
            }
        }
    }

    fn report_rebuilds<C: Console + ?Sized>(&self, console: &mut C, before: u32) {
        if self.game.deck_rebuilds() > before {
            console.show(&TableEvent::DeckRebuilt {
                remaining: self.game.cards_remaining(),
            });
        }
    }

    fn ask_replay<C: Console + ?Sized>(&self, console: &mut C) -> ReplayChoice {
        loop {
            let Some(line) = console.prompt(Prompt::Replay) else {
                return ReplayChoice::Quit;
            };

            match line.parse::<ReplayChoice>() {
                Ok(choice) => return choice,
                Err(error) => {
                    console.show(&TableEvent::InvalidInput {
                        prompt: Prompt::Replay,
                        error,
                    });
                    if self.game.options.invalid_replay == ReplayFallback::Decline {
                        return ReplayChoice::Quit;
                    }
                }
            }
        }
    }
}
