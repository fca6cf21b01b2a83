//! Error types for card collections, parsing and encoding.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when editing a [`Stack`](crate::Stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// The card is not in the stack.
    #[error("{0} not in stack")]
    NotFound(Card),
    /// The identifier pair does not describe a card.
    #[error("({rank}, {suit}) is not a card")]
    InvalidElement {
        /// Raw rank identifier.
        rank: u8,
        /// Raw suit identifier.
        suit: u8,
    },
}

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input is empty.
    #[error("empty card")]
    Empty,
    /// The rank part is not recognized.
    #[error("unknown rank")]
    UnknownRank,
    /// The suit symbol is not recognized.
    #[error("unknown suit {0:?}")]
    UnknownSuit(char),
}

/// Errors that can occur when decoding numeric card identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Rank identifier outside 1..=13.
    #[error("invalid rank identifier {0}")]
    InvalidRank(u8),
    /// Suit identifier outside 1..=4.
    #[error("invalid suit identifier {0}")]
    InvalidSuit(u8),
    /// Deck index outside 0..52.
    #[error("deck index {0} out of range")]
    IndexOutOfRange(usize),
}
