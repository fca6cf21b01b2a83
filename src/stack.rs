//! Ordered card collections.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::iter::Copied;
use core::slice;

use itertools::{Combinations, Itertools};

use crate::card::{Card, cards_identical};
use crate::encoding::card_from_ids;
use crate::error::StackError;

/// An ordered collection of cards.
///
/// Insertion order is preserved and duplicates are allowed; deck uniqueness is
/// the dealer's concern, not the stack's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    /// Cards in insertion order.
    cards: Vec<Card>,
}

impl Stack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a stack holding the given cards in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the first card identical to `card`.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::NotFound`] if no card in the stack matches.
    pub fn remove(&mut self, card: Card) -> Result<Card, StackError> {
        let index = self
            .cards
            .iter()
            .position(|c| cards_identical(c, &card))
            .ok_or(StackError::NotFound(card))?;
        Ok(self.cards.remove(index))
    }

    /// Removes `card` from the stack, e.g. when discarding to the crib.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::NotFound`] if no card in the stack matches.
    pub fn discard(&mut self, card: Card) -> Result<(), StackError> {
        self.remove(card).map(|_| ())
    }

    /// Returns a new stack with `card` appended, leaving `self` untouched.
    #[must_use]
    pub fn with_card(&self, card: Card) -> Self {
        let mut cards = Vec::with_capacity(self.cards.len() + 1);
        cards.extend_from_slice(&self.cards);
        cards.push(card);
        Self { cards }
    }

    /// Appends `card` in place.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Appends the card described by a rank and suit identifier pair.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::InvalidElement`] if the pair does not describe a
    /// card (including the `0` padding sentinel).
    pub fn try_push_ids(&mut self, rank: u8, suit: u8) -> Result<(), StackError> {
        let card =
            card_from_ids(rank, suit).map_err(|_| StackError::InvalidElement { rank, suit })?;
        self.push(card);
        Ok(())
    }

    /// Moves every card, in order, to the end of `other`, leaving `self` empty.
    pub fn drain_into(&mut self, other: &mut Self) {
        other.cards.append(&mut self.cards);
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Iterates over every `k`-card combination.
    ///
    /// Cards are picked by position, so equal cards at different positions
    /// give distinct combinations. Combinations come in lexicographic order of
    /// their positions: for `[a, b, c]` and `k = 2` the order is `ab`, `ac`,
    /// `bc`.
    #[must_use]
    pub fn combinations(&self, k: usize) -> Combinations<Copied<slice::Iter<'_, Card>>> {
        self.cards.iter().copied().combinations(k)
    }

    /// Returns the cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterates over the cards in order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Stack {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl From<&[Card]> for Stack {
    fn from(cards: &[Card]) -> Self {
        Self::from_cards(cards.to_vec())
    }
}

impl AsRef<[Card]> for Stack {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

impl FromIterator<Card> for Stack {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter.into_iter().collect())
    }
}

impl Extend<Card> for Stack {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for Stack {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
