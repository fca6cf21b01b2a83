//! Scoring the most recent card of a play.

use crate::card::{Card, ranks_equal};

use super::sequence::is_sequence;

/// Points the last card of a play earned, by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayScore {
    /// 2, 6 or 12 for a trailing pair, triple or four of a kind.
    pub pairs: u32,
    /// 2 when the running total is exactly fifteen.
    pub fifteen: u32,
    /// Length of the longest trailing run.
    pub run: u32,
}

impl PlayScore {
    /// Sum of every category.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.pairs + self.fifteen + self.run
    }
}

/// Sum of the counting values of `cards`.
#[must_use]
pub fn running_total(cards: &[Card]) -> u32 {
    cards.iter().map(|card| u32::from(card.point_value())).sum()
}

/// Scores the last card of `cards`, given every card played before it.
///
/// Only the trailing cards matter: equal ranks at the end of the play, the
/// total reaching fifteen, and the longest run formed by the last three or
/// more cards in any order. The total is never checked against 31.
#[must_use]
pub fn score_play(cards: &[Card]) -> PlayScore {
    let Some(last) = cards.last() else {
        return PlayScore::default();
    };

    let same = cards
        .iter()
        .rev()
        .take_while(|card| ranks_equal(card, last))
        .count() as u32;
    let pairs = if same >= 2 { same * (same - 1) } else { 0 };

    let fifteen = if running_total(cards) == 15 { 2 } else { 0 };

    let len = cards.len();
    let run = (3..=len)
        .rev()
        .find(|&window| is_sequence(&cards[len - window..]))
        .map_or(0, |window| window as u32);

    PlayScore {
        pairs,
        fifteen,
        run,
    }
}
