//! Card, rank and suit types.
//!
//! A [`Card`] compares equal to another card only when both rank and suit
//! match. Rank comparisons used by the scorers go through the named helpers
//! [`order_value_of`], [`ranks_equal`] and [`cards_identical`] so that "same
//! rank" is never confused with "same card".

use core::fmt::{self, Write as _};
use core::str::FromStr;

use crate::error::ParseCardError;
use crate::sync::{HashMap, Lazy};

/// Card rank. The discriminant is the order value (Ace = 1, King = 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Position used for runs and pairs (Ace = 1, Jack = 11, Queen = 12, King = 13).
    #[must_use]
    pub const fn order_value(self) -> u8 {
        self as u8
    }

    /// Counting value used for fifteens and the play total (face cards count 10).
    #[must_use]
    pub const fn point_value(self) -> u8 {
        match self {
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self as u8,
        }
    }

    /// Returns the rank with the given order value, if any.
    #[must_use]
    pub const fn from_order_value(value: u8) -> Option<Self> {
        match value {
            1..=13 => Some(Self::ALL[(value - 1) as usize]),
            _ => None,
        }
    }

    /// Short symbol (`A`, `2`, ..., `10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

/// Card suit. Suits carry no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades (♤).
    Spades,
    /// Hearts (♡).
    Hearts,
    /// Clubs (♧).
    Clubs,
    /// Diamonds (♢).
    Diamonds,
}

impl Suit {
    /// All suits in identifier order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♤',
            Self::Hearts => '♡',
            Self::Clubs => '♧',
            Self::Diamonds => '♢',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Order value of the card's rank.
    #[must_use]
    pub const fn order_value(&self) -> u8 {
        self.rank.order_value()
    }

    /// Counting value of the card's rank.
    #[must_use]
    pub const fn point_value(&self) -> u8 {
        self.rank.point_value()
    }
}

/// Order value of a card, used for run and pair comparisons.
#[must_use]
pub const fn order_value_of(card: &Card) -> u8 {
    card.order_value()
}

/// Returns whether two cards share a rank, regardless of suit.
#[must_use]
pub const fn ranks_equal(a: &Card, b: &Card) -> bool {
    a.order_value() == b.order_value()
}

/// Returns whether two cards are the same card (rank and suit).
#[must_use]
pub fn cards_identical(a: &Card, b: &Card) -> bool {
    a == b
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

static RANK_SYMBOLS: Lazy<HashMap<&'static str, Rank>> = Lazy::new(|| {
    let mut symbols = HashMap::new();
    for rank in Rank::ALL {
        symbols.insert(rank.symbol(), rank);
    }
    for (alias, rank) in [
        ("T", Rank::Ten),
        ("a", Rank::Ace),
        ("t", Rank::Ten),
        ("j", Rank::Jack),
        ("q", Rank::Queen),
        ("k", Rank::King),
    ] {
        symbols.insert(alias, rank);
    }
    symbols
});

static SUIT_SYMBOLS: Lazy<HashMap<char, Suit>> = Lazy::new(|| {
    let mut symbols = HashMap::new();
    for suit in Suit::ALL {
        symbols.insert(suit.symbol(), suit);
    }
    for (alias, suit) in [
        ('♠', Suit::Spades),
        ('♥', Suit::Hearts),
        ('♣', Suit::Clubs),
        ('♦', Suit::Diamonds),
        ('S', Suit::Spades),
        ('H', Suit::Hearts),
        ('C', Suit::Clubs),
        ('D', Suit::Diamonds),
        ('s', Suit::Spades),
        ('h', Suit::Hearts),
        ('c', Suit::Clubs),
        ('d', Suit::Diamonds),
    ] {
        symbols.insert(alias, suit);
    }
    symbols
});

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses `A♤`, `10♡`, `TH`, `kd` and similar forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let suit_symbol = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_symbol = chars.as_str();

        let rank = RANK_SYMBOLS
            .get(rank_symbol)
            .copied()
            .ok_or(ParseCardError::UnknownRank)?;
        let suit = SUIT_SYMBOLS
            .get(&suit_symbol)
            .copied()
            .ok_or(ParseCardError::UnknownSuit(suit_symbol))?;

        Ok(Self::new(rank, suit))
    }
}
