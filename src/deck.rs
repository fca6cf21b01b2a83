//! A shuffled 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A single 52-card deck, shuffled at construction.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards in reverse deal order; the next card dealt is the last one.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck shuffled with the given seed.
    ///
    /// The same seed always produces the same order.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Creates a deck shuffled with the caller's random number generator.
    ///
    /// Cards are dealt from the front of the shuffled order.
    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::ordered();
        cards.shuffle(rng);
        cards.reverse();
        Self { cards }
    }

    /// Every card once, suit by suit, ranks ascending.
    fn ordered() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    /// Deals the next card of the shuffled order, or `None` once the deck is
    /// exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
