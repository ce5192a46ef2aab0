//! Game integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use solo_blackjack::{
    ActionError, Card, DECK_SIZE, DealError, DealerPolicy, Decision, Deck, DeckError,
    EmptyDeckPolicy, Game, GameOptions, GameState, Hand, MAX_DEALER_STANDS_ABOVE, Outcome, Policy,
    Rank, ShowdownError, Suit, total_value,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &c in cards {
        hand.add_card(c);
    }
    hand
}

fn game_with_draws(options: GameOptions, draws: &[Card]) -> Game {
    let mut game = Game::new(options, 7);
    game.deck = Deck::from_cards(draws.to_vec());
    game
}

#[test]
fn card_values_follow_rank() {
    let numerals = [
        (Rank::Two, 2),
        (Rank::Three, 3),
        (Rank::Four, 4),
        (Rank::Five, 5),
        (Rank::Six, 6),
        (Rank::Seven, 7),
        (Rank::Eight, 8),
        (Rank::Nine, 9),
        (Rank::Ten, 10),
    ];
    for (rank, value) in numerals {
        assert_eq!(card(Suit::Hearts, rank).value(), value);
    }

    for rank in [Rank::Jack, Rank::Queen, Rank::King] {
        assert_eq!(card(Suit::Spades, rank).value(), 10);
    }

    assert_eq!(card(Suit::Clubs, Rank::Ace).value(), 11);
    assert_eq!(card(Suit::Diamonds, Rank::Queen).to_string(), "Queen of Diamonds");
}

#[test]
fn hand_soft_ace_adjustment() {
    let blackjack = hand_of(&[card(Suit::Hearts, Rank::Ace), card(Suit::Diamonds, Rank::King)]);
    assert_eq!(blackjack.value(), 21);
    assert!(blackjack.is_soft());

    let two_aces_and_ten = hand_of(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Clubs, Rank::Ten),
    ]);
    assert_eq!(two_aces_and_ten.value(), 12);
    assert!(!two_aces_and_ten.is_soft());

    let soft_nineteen = hand_of(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Clubs, Rank::Seven),
    ]);
    assert_eq!(soft_nineteen.value(), 19);
    assert!(soft_nineteen.is_soft());

    let bust = hand_of(&[
        card(Suit::Hearts, Rank::King),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Clubs, Rank::Two),
    ]);
    assert_eq!(bust.value(), 22);
    assert!(bust.is_bust());

    // Totals are recomputed, so asking twice gives the same answer.
    assert_eq!(two_aces_and_ten.value(), two_aces_and_ten.value());
}

#[test]
fn fresh_deck_holds_every_card_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deck = Deck::new(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE);

    let shuffled: HashSet<Card> = deck.iter().copied().collect();
    let ordered: HashSet<Card> = Deck::ordered().iter().copied().collect();
    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_eq!(shuffled, ordered);
}

#[test]
fn shuffle_depends_only_on_seed() {
    let a = Deck::new(&mut ChaCha8Rng::seed_from_u64(11));
    let b = Deck::new(&mut ChaCha8Rng::seed_from_u64(11));
    let c = Deck::new(&mut ChaCha8Rng::seed_from_u64(12));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, Deck::ordered());
}

#[test]
fn draw_removes_front_card() {
    let mut deck = Deck::ordered();
    let first = deck.draw().unwrap();
    assert_eq!(first, card(Suit::Hearts, Rank::Two));
    assert_eq!(deck.len(), DECK_SIZE - 1);
    assert!(!deck.contains(&first));

    let mut empty = Deck::from_cards(vec![card(Suit::Clubs, Rank::Nine)]);
    assert!(empty.draw().is_ok());
    assert_eq!(empty.draw().unwrap_err(), DeckError::Empty);
}

#[test]
fn deck_without_skips_held_cards() {
    let held = [card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::Ten)];
    let deck = Deck::without(&held, &mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(deck.len(), DECK_SIZE - 2);
    assert!(held.iter().all(|c| !deck.contains(c)));
}

#[test]
fn dealer_policy_hits_through_seventeen() {
    let policy = DealerPolicy::default();

    let hard_seventeen = hand_of(&[card(Suit::Hearts, Rank::Ten), card(Suit::Clubs, Rank::Seven)]);
    let soft_seventeen = hand_of(&[card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Six)]);
    let eighteen = hand_of(&[card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Seven)]);

    assert_eq!(policy.decide(&hard_seventeen), Decision::Hit);
    assert_eq!(policy.decide(&soft_seventeen), Decision::Hit);
    assert_eq!(policy.decide(&eighteen), Decision::Stand);
}

#[test]
fn deal_order_is_player_player_dealer_dealer() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Diamonds, Rank::Nine), // player
            card(Suit::Clubs, Rank::Six),    // dealer up
            card(Suit::Spades, Rank::Five),  // dealer hole
        ],
    );

    let opening = game.deal().unwrap();
    assert_eq!(
        opening.player,
        [card(Suit::Hearts, Rank::Ten), card(Suit::Diamonds, Rank::Nine)]
    );
    assert_eq!(opening.dealer_up, card(Suit::Clubs, Rank::Six));
    assert_eq!(opening.dealer_hole, card(Suit::Spades, Rank::Five));
    assert_eq!(game.player().total(), 19);
    assert_eq!(game.dealer().total(), 11);
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn dealer_hits_to_twenty_one_and_wins() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Clubs, Rank::Six),
            card(Suit::Spades, Rank::Five),
            card(Suit::Spades, Rank::Queen), // dealer draw
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Spades, Rank::Queen)]);
    assert_eq!(game.state(), GameState::RoundOver);

    let result = game.showdown().unwrap();
    assert_eq!(result.player_value, 19);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.outcome.to_string(), "Dealer wins.");
}

#[test]
fn soft_blackjack_beats_dealer_eighteen() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Diamonds, Rank::King),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::Nine),
        ],
    );

    game.deal().unwrap();
    assert_eq!(game.player().total(), 21);
    game.stand().unwrap();

    let drawn = game.dealer_play().unwrap();
    assert!(drawn.is_empty());

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.dealer_value, 18);
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Spades, Rank::Three),
            card(Suit::Clubs, Rank::Six), // player hit
        ],
    );

    game.deal().unwrap();
    let hit = game.hit().unwrap();
    assert_eq!(hit, card(Suit::Clubs, Rank::Six));
    assert_eq!(game.player().total(), 23);
    assert_eq!(game.state(), GameState::RoundOver);

    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.dealer().hand().len(), 2);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBust);
    assert_eq!(result.outcome.to_string(), "Dealer wins (player bust).");
}

#[test]
fn equal_totals_are_a_draw() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Diamonds, Rank::Queen),
            card(Suit::Clubs, Rank::King),
            card(Suit::Spades, Rank::Jack),
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::Draw);
    assert_eq!(result.outcome.winner(), None);
}

#[test]
fn dealer_bust_loses() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Six),
            card(Suit::Spades, Rank::King), // dealer draw
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.showdown().unwrap();
    assert_eq!(result.dealer_value, 26);
    assert_eq!(result.outcome, Outcome::DealerBust);
}

#[test]
fn outcome_precedence() {
    assert_eq!(Outcome::compare(22, 25), Outcome::PlayerBust);
    assert_eq!(Outcome::compare(12, 22), Outcome::DealerBust);
    assert_eq!(Outcome::compare(20, 20), Outcome::Draw);
    assert_eq!(Outcome::compare(20, 19), Outcome::PlayerWins);
    assert_eq!(Outcome::compare(18, 19), Outcome::DealerWins);
}

#[test]
fn dealer_threshold_is_configurable() {
    let options = GameOptions::default().with_dealer_stands_above(16);
    let mut game = game_with_draws(
        options,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Spades, Rank::Four),
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());
    assert_eq!(game.showdown().unwrap().outcome, Outcome::PlayerWins);
}

#[test]
fn dealer_threshold_is_capped_below_blackjack() {
    let options = GameOptions::default().with_dealer_stands_above(u8::MAX);
    assert_eq!(options.dealer_stands_above, MAX_DEALER_STANDS_ABOVE);
    assert_eq!(MAX_DEALER_STANDS_ABOVE, 20);

    let policy = DealerPolicy::new(u8::MAX);
    let twenty = hand_of(&[card(Suit::Hearts, Rank::King), card(Suit::Clubs, Rank::Queen)]);
    let twenty_one = hand_of(&[card(Suit::Hearts, Rank::King), card(Suit::Clubs, Rank::Ace)]);
    assert_eq!(policy.decide(&twenty), Decision::Hit);
    assert_eq!(policy.decide(&twenty_one), Decision::Stand);
}

#[test]
fn whole_deck_total_does_not_saturate() {
    let cards: Vec<Card> = Deck::ordered().iter().copied().collect();

    // 380 with every Ace at 11, minus 10 for each of the four Aces.
    assert_eq!(total_value(&cards), 340);
    assert!(hand_of(&cards).is_bust());
}

struct AlwaysStand;

impl Policy for AlwaysStand {
    fn decide(&self, _hand: &Hand) -> Decision {
        Decision::Stand
    }
}

#[test]
fn dealer_play_accepts_any_policy() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Spades, Rank::Three),
            card(Suit::Spades, Rank::Four),
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    assert!(game.dealer_play_with(&AlwaysStand).unwrap().is_empty());
    assert_eq!(game.dealer().total(), 5);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn actions_rejected_in_wrong_state() {
    let mut game = Game::new(GameOptions::default(), 1);

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);

    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);
}

#[test]
fn empty_deck_rebuilds_from_unheld_cards() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Clubs, Rank::Six),
            card(Suit::Spades, Rank::Five),
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    let drawn = game.dealer_play().unwrap();
    assert!(!drawn.is_empty());
    assert_eq!(game.deck_rebuilds(), 1);
    assert!(!game.is_deck_exhausted());

    let held: HashSet<Card> = game
        .player()
        .hand()
        .cards()
        .iter()
        .chain(game.dealer().hand().cards())
        .copied()
        .collect();
    assert_eq!(held.len(), 4 + drawn.len());
    assert_eq!(game.cards_remaining() + held.len(), DECK_SIZE);
    assert!(held.iter().all(|c| !game.deck.contains(c)));
}

struct AlwaysHit;

impl Policy for AlwaysHit {
    fn decide(&self, _hand: &Hand) -> Decision {
        Decision::Hit
    }
}

#[test]
fn fully_held_deck_pushes_without_rebuilding() {
    let mut game = Game::new(GameOptions::default(), 11);

    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(
        game.dealer_play_with(&AlwaysHit).unwrap_err(),
        ShowdownError::NoCards
    );

    assert_eq!(game.deck_rebuilds(), 0);
    assert!(game.is_deck_exhausted());
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.player().hand().len() + game.dealer().hand().len(), DECK_SIZE);
    assert_eq!(game.cards_remaining(), 0);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::Draw);
    assert!(result.deck_exhausted);
}

#[test]
fn empty_deck_push_ends_round_as_draw() {
    let options = GameOptions::default().with_empty_deck(EmptyDeckPolicy::Push);
    let mut game = game_with_draws(
        options,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Clubs, Rank::Six),
            card(Suit::Spades, Rank::Five),
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::NoCards);
    assert_eq!(game.state(), GameState::RoundOver);

    let result = game.showdown().unwrap();
    assert!(result.deck_exhausted);
    assert_eq!(result.outcome, Outcome::Draw);
}

#[test]
fn push_policy_on_short_deal() {
    let options = GameOptions::default().with_empty_deck(EmptyDeckPolicy::Push);
    let mut game = game_with_draws(
        options,
        &[card(Suit::Hearts, Rank::Ten), card(Suit::Diamonds, Rank::Nine)],
    );

    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.showdown().unwrap().outcome, Outcome::Draw);
}

#[test]
fn hit_on_empty_deck_under_push() {
    let options = GameOptions::default().with_empty_deck(EmptyDeckPolicy::Push);
    let mut game = game_with_draws(
        options,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::Seven),
        ],
    );

    game.deal().unwrap();
    assert_eq!(game.hit().unwrap_err(), ActionError::NoCards);
    assert_eq!(game.player().hand().len(), 2);
    assert!(game.is_deck_exhausted());
}

#[test]
fn new_round_resets_everything() {
    let mut game = game_with_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Spades, Rank::Three),
            card(Suit::Clubs, Rank::Six),
        ],
    );
    game.deal().unwrap();
    game.hit().unwrap();
    assert_eq!(game.state(), GameState::RoundOver);

    game.new_round();
    assert_eq!(game.state(), GameState::Dealing);
    assert!(game.player().hand().is_empty());
    assert!(game.dealer().hand().is_empty());
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.deck_rebuilds(), 0);

    game.deal().unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
}
