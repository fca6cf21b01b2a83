//! Run detection.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, order_value_of};

/// Returns whether `cards` form a run: three or more distinct ranks with no gap.
///
/// Input order and suits are ignored. A repeated rank breaks the run.
///
/// ```
/// use cribrs::{Card, Rank, Suit, is_sequence};
///
/// let run = [
///     Card::new(Rank::Seven, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Clubs),
///     Card::new(Rank::Six, Suit::Spades),
/// ];
/// assert!(is_sequence(&run));
/// assert!(!is_sequence(&run[..2]));
/// ```
#[must_use]
pub fn is_sequence(cards: &[Card]) -> bool {
    if cards.len() < 3 {
        return false;
    }

    let mut values: Vec<u8> = cards.iter().map(order_value_of).collect();
    values.sort_unstable();
    values.windows(2).all(|pair| pair[0] + 1 == pair[1])
}
