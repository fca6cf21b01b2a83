//! Counting a hand or crib together with the starter.

use crate::card::{Card, Rank, ranks_equal};
use crate::options::ScoringOptions;
use crate::stack::Stack;

use super::flush::flush_points_with;
use super::sequence::is_sequence;

/// Points a hand earned, by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandScore {
    /// Two points per pair of equal ranks.
    pub pairs: u32,
    /// Runs of the longest length found, one score per distinct run.
    pub runs: u32,
    /// Flush points.
    pub flush: u32,
    /// Two points per combination summing to fifteen.
    pub fifteens: u32,
    /// Jack of the starter's suit held in hand.
    pub nobs: u32,
}

impl HandScore {
    /// Scores `hand` with the optional `starter`.
    ///
    /// `hand` excludes the starter. Every combination is taken by position,
    /// so cards that compare equal by rank are still counted separately.
    #[must_use]
    pub fn evaluate(
        hand: &Stack,
        starter: Option<Card>,
        is_crib: bool,
        options: &ScoringOptions,
    ) -> Self {
        let counted = starter.map_or_else(|| hand.clone(), |card| hand.with_card(card));
        let size = counted.len();

        let pairs = counted
            .combinations(2)
            .filter(|pair| ranks_equal(&pair[0], &pair[1]))
            .count() as u32
            * 2;

        // Only the longest run length scores; shorter runs inside it do not.
        let runs = (3..=size)
            .rev()
            .map(|k| counted.combinations(k).filter(|c| is_sequence(c)).count() * k)
            .find(|&points| points > 0)
            .unwrap_or(0) as u32;

        let flush = flush_points_with(options, hand.cards(), starter, is_crib);

        let fifteens = (2..=size)
            .flat_map(|k| counted.combinations(k))
            .filter(|combination| {
                combination
                    .iter()
                    .map(|card| u32::from(card.point_value()))
                    .sum::<u32>()
                    == 15
            })
            .count() as u32
            * 2;

        let nobs = starter.map_or(0, |starter| {
            hand.iter()
                .filter(|card| card.rank == Rank::Jack && card.suit == starter.suit)
                .count() as u32
                * options.nobs
        });

        let score = Self {
            pairs,
            runs,
            flush,
            fifteens,
            nobs,
        };
        log::debug!(
            "hand [{hand}] starter {starter:?} crib {is_crib}: {score:?} = {}",
            score.total()
        );
        score
    }

    /// Sum of every category.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.pairs + self.runs + self.flush + self.fifteens + self.nobs
    }
}

/// Scores a hand (or crib, when `is_crib`) with the standard rules.
///
/// ```
/// use cribrs::{Card, Rank, Stack, Suit, score_hand};
///
/// let hand: Stack = [
///     Card::new(Rank::Five, Suit::Spades),
///     Card::new(Rank::Five, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Clubs),
///     Card::new(Rank::Jack, Suit::Diamonds),
/// ]
/// .into_iter()
/// .collect();
///
/// let starter = Card::new(Rank::Five, Suit::Diamonds);
/// assert_eq!(score_hand(&hand, Some(starter), false), 29);
/// ```
#[must_use]
pub fn score_hand(hand: &Stack, starter: Option<Card>, is_crib: bool) -> u32 {
    HandScore::evaluate(hand, starter, is_crib, &ScoringOptions::default()).total()
}
