//! A cribbage scoring engine with optional `no_std` support.
//!
//! The crate scores complete hands and cribs with [`score_hand`] and scores
//! table play one card at a time with [`Pegging`]. Both work on plain
//! [`Card`] values, so a game controller (or a reinforcement-learning
//! environment) only has to feed cards in and read points out.
//!
//! # Example
//!
//! ```
//! use cribrs::{Card, Pegging, Rank, Stack, Suit, score_hand};
//!
//! let hand: Stack = ["A♤", "3♤", "4♤", "6♤"]
//!     .iter()
//!     .map(|s| s.parse::<Card>())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(score_hand(&hand, Some(Card::new(Rank::Eight, Suit::Spades)), false), 9);
//!
//! let mut pegging = Pegging::new();
//! pegging.play(Card::new(Rank::Five, Suit::Hearts));
//! assert_eq!(pegging.play(Card::new(Rank::King, Suit::Clubs)).points(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod encoding;
pub mod error;
pub mod options;
pub mod pegging;
pub mod score;
pub mod stack;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, cards_identical, order_value_of, ranks_equal};
pub use deck::Deck;
pub use encoding::{card_from_deck_index, card_from_ids, card_to_ids, deck_index, stack_to_ids};
pub use error::{EncodingError, ParseCardError, StackError};
pub use options::ScoringOptions;
pub use pegging::{Pegging, PlayOutcome};
pub use score::{
    HandScore, PlayScore, flush_points, flush_points_with, is_sequence, running_total,
    score_hand, score_play,
};
pub use stack::Stack;
