//! Card model, parsing, encoding and deck tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use cribrs::{
    Card, DECK_SIZE, Deck, EncodingError, ParseCardError, Rank, Stack, Suit, card_from_deck_index,
    card_from_ids, card_to_ids, cards_identical, deck_index, order_value_of, ranks_equal,
    stack_to_ids,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn rank_values() {
    assert_eq!(Rank::Ace.point_value(), 1);
    assert_eq!(Rank::Ace.order_value(), 1);
    assert_eq!(Rank::Seven.point_value(), 7);
    assert_eq!(Rank::Ten.point_value(), 10);
    assert_eq!(Rank::Jack.point_value(), 10);
    assert_eq!(Rank::Jack.order_value(), 11);
    assert_eq!(Rank::Queen.order_value(), 12);
    assert_eq!(Rank::King.point_value(), 10);
    assert_eq!(Rank::King.order_value(), 13);

    let orders: Vec<u8> = Rank::ALL.iter().map(|r| r.order_value()).collect();
    assert_eq!(orders, (1..=13).collect::<Vec<u8>>());
    assert_eq!(Rank::from_order_value(0), None);
    assert_eq!(Rank::from_order_value(12), Some(Rank::Queen));
    assert_eq!(Rank::from_order_value(14), None);
}

#[test]
fn rank_and_identity_comparisons() {
    let five_spades = card(Rank::Five, Suit::Spades);
    let five_hearts = card(Rank::Five, Suit::Hearts);

    assert!(ranks_equal(&five_spades, &five_hearts));
    assert!(!cards_identical(&five_spades, &five_hearts));
    assert!(cards_identical(&five_spades, &card(Rank::Five, Suit::Spades)));
    assert_ne!(five_spades, five_hearts);
    assert_eq!(order_value_of(&card(Rank::Queen, Suit::Clubs)), 12);
}

#[test]
fn display_and_parse() {
    assert_eq!(card(Rank::Ace, Suit::Spades).to_string(), "A♤");
    assert_eq!(card(Rank::Ten, Suit::Hearts).to_string(), "10♡");
    assert_eq!(card(Rank::King, Suit::Diamonds).to_string(), "K♢");
    let suits: String = Suit::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(suits, "♤♡♧♢");

    assert_eq!("A♤".parse::<Card>(), Ok(card(Rank::Ace, Suit::Spades)));
    assert_eq!("10♡".parse::<Card>(), Ok(card(Rank::Ten, Suit::Hearts)));
    assert_eq!("TH".parse::<Card>(), Ok(card(Rank::Ten, Suit::Hearts)));
    assert_eq!(" qc ".parse::<Card>(), Ok(card(Rank::Queen, Suit::Clubs)));
    assert_eq!("7♦".parse::<Card>(), Ok(card(Rank::Seven, Suit::Diamonds)));

    assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
    assert_eq!("♤".parse::<Card>(), Err(ParseCardError::UnknownRank));
    assert_eq!("11♤".parse::<Card>(), Err(ParseCardError::UnknownRank));
    assert_eq!("AX".parse::<Card>(), Err(ParseCardError::UnknownSuit('X')));

    for rank in Rank::ALL {
        for suit in Suit::ALL {
            let c = card(rank, suit);
            assert_eq!(c.to_string().parse::<Card>(), Ok(c));
        }
    }
}

#[test]
fn identifier_encoding() {
    assert_eq!(card_to_ids(&card(Rank::Ace, Suit::Clubs)), (1, 3));

    let hand = Stack::from_cards(vec![
        card(Rank::Five, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Five, Suit::Clubs),
        card(Rank::Jack, Suit::Diamonds),
    ]);
    assert_eq!(stack_to_ids(&hand), (vec![5, 5, 5, 11], vec![1, 2, 3, 4]));
    assert_eq!(stack_to_ids(&Stack::new()), (vec![], vec![]));
}

#[test]
fn identifier_round_trip() {
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            let c = card(rank, suit);
            let (rank_id, suit_id) = card_to_ids(&c);
            assert_eq!(card_from_ids(rank_id, suit_id), Ok(c));
        }
    }

    assert_eq!(card_from_ids(0, 1), Err(EncodingError::InvalidRank(0)));
    assert_eq!(card_from_ids(14, 1), Err(EncodingError::InvalidRank(14)));
    assert_eq!(card_from_ids(1, 0), Err(EncodingError::InvalidSuit(0)));
    assert_eq!(card_from_ids(1, 5), Err(EncodingError::InvalidSuit(5)));
}

#[test]
fn deck_index_round_trip() {
    assert_eq!(deck_index(&card(Rank::Ace, Suit::Spades)), 0);
    assert_eq!(deck_index(&card(Rank::King, Suit::Spades)), 12);
    assert_eq!(deck_index(&card(Rank::Ace, Suit::Hearts)), 13);
    assert_eq!(deck_index(&card(Rank::King, Suit::Diamonds)), 51);

    for index in 0..DECK_SIZE {
        let c = card_from_deck_index(index).unwrap();
        assert_eq!(deck_index(&c), index);
    }
    assert_eq!(
        card_from_deck_index(DECK_SIZE),
        Err(EncodingError::IndexOutOfRange(DECK_SIZE))
    );
}

#[test]
fn deck_deals_every_card_once() {
    let mut deck = Deck::new(7);
    assert_eq!(deck.len(), DECK_SIZE);

    let mut seen = HashSet::new();
    while let Some(c) = deck.deal() {
        assert!(seen.insert(c), "{c} dealt twice");
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.deal(), None);
}

#[test]
fn deck_order_depends_only_on_seed() {
    let deal_all = |seed| {
        let mut deck = Deck::new(seed);
        core::iter::from_fn(move || deck.deal()).collect::<Vec<_>>()
    };

    assert_eq!(deal_all(42), deal_all(42));
    assert_ne!(deal_all(42), deal_all(43));
}

#[test]
fn deck_deals_from_front_of_shuffle() {
    let mut shuffled: Vec<Card> = (0..DECK_SIZE)
        .map(|index| card_from_deck_index(index).unwrap())
        .collect();
    shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(42));

    let mut deck = Deck::new(42);
    assert_eq!(deck.deal(), Some(shuffled[0]));
    assert_eq!(deck.deal(), Some(shuffled[1]));

    let rest: Vec<Card> = core::iter::from_fn(|| deck.deal()).collect();
    assert_eq!(rest, shuffled[2..]);

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut custom = Deck::shuffled(&mut rng);
    assert_eq!(custom.deal(), Some(shuffled[0]));
}
