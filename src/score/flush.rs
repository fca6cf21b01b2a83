//! Flush scoring.

use crate::card::{Card, Suit};
use crate::options::ScoringOptions;

fn common_suit(cards: &[Card]) -> Option<Suit> {
    let first = cards.first()?;
    cards
        .iter()
        .all(|card| card.suit == first.suit)
        .then_some(first.suit)
}

/// Flush points for `hand` (starter excluded) using the standard rules.
///
/// A hand earns one point per card when every card shares a suit, plus one
/// more when the starter matches. A crib only scores when the starter matches
/// too, and then scores every card including the starter.
#[must_use]
pub fn flush_points(hand: &[Card], starter: Option<Card>, is_crib: bool) -> u32 {
    flush_points_with(&ScoringOptions::default(), hand, starter, is_crib)
}

/// Flush points for `hand` (starter excluded) under the given options.
#[must_use]
pub fn flush_points_with(
    options: &ScoringOptions,
    hand: &[Card],
    starter: Option<Card>,
    is_crib: bool,
) -> u32 {
    let Some(suit) = common_suit(hand) else {
        return 0;
    };

    let len = hand.len() as u32;
    let starter_matches = starter.is_some_and(|card| card.suit == suit);

    match (starter_matches, is_crib && options.crib_flush_requires_starter) {
        (true, _) => len + 1,
        (false, true) => 0,
        (false, false) => len,
    }
}
