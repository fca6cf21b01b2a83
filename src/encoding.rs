//! Numeric card identifiers for downstream model consumers.
//!
//! Ranks map to `1..=13` (Ace to King) and suits to `1..=4` in the order
//! ♤ ♡ ♧ ♢. Identifier `0` is reserved as a padding sentinel and never
//! decodes to a card. The 52-slot deck index is `suit_index * 13 + rank_index`
//! with both indices starting at zero.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EncodingError;
use crate::stack::Stack;

/// Identifier reserved for "no card".
pub const PADDING: u8 = 0;

/// Number of distinct rank identifiers (excluding padding).
pub const RANK_COUNT: usize = Rank::ALL.len();

/// Number of distinct suit identifiers (excluding padding).
pub const SUIT_COUNT: usize = Suit::ALL.len();

/// Rank identifier in `1..=13`.
#[must_use]
pub const fn rank_id(rank: Rank) -> u8 {
    rank.order_value()
}

/// Suit identifier in `1..=4`.
#[must_use]
pub const fn suit_id(suit: Suit) -> u8 {
    match suit {
        Suit::Spades => 1,
        Suit::Hearts => 2,
        Suit::Clubs => 3,
        Suit::Diamonds => 4,
    }
}

/// Encodes a card as its `(rank, suit)` identifier pair.
#[must_use]
pub const fn card_to_ids(card: &Card) -> (u8, u8) {
    (rank_id(card.rank), suit_id(card.suit))
}

/// Decodes a `(rank, suit)` identifier pair.
///
/// # Errors
///
/// Returns an error if either identifier is the padding sentinel or out of
/// range.
pub const fn card_from_ids(rank: u8, suit: u8) -> Result<Card, EncodingError> {
    let Some(rank_value) = Rank::from_order_value(rank) else {
        return Err(EncodingError::InvalidRank(rank));
    };
    if suit == PADDING || suit as usize > SUIT_COUNT {
        return Err(EncodingError::InvalidSuit(suit));
    }
    Ok(Card::new(rank_value, Suit::ALL[(suit - 1) as usize]))
}

/// Encodes a stack as parallel rank and suit identifier vectors.
#[must_use]
pub fn stack_to_ids(stack: &Stack) -> (Vec<u8>, Vec<u8>) {
    stack.iter().map(card_to_ids).unzip()
}

/// Position of the card in a 52-slot deck layout.
#[must_use]
pub const fn deck_index(card: &Card) -> usize {
    (suit_id(card.suit) as usize - 1) * RANK_COUNT + (rank_id(card.rank) as usize - 1)
}

/// Decodes a 52-slot deck position.
///
/// # Errors
///
/// Returns [`EncodingError::IndexOutOfRange`] if `index >= 52`.
pub const fn card_from_deck_index(index: usize) -> Result<Card, EncodingError> {
    if index >= DECK_SIZE {
        return Err(EncodingError::IndexOutOfRange(index));
    }
    Ok(Card::new(
        Rank::ALL[index % RANK_COUNT],
        Suit::ALL[index / RANK_COUNT],
    ))
}
