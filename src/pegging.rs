//! Table play state.

use crate::card::Card;
use crate::options::ScoringOptions;
use crate::score::{PlayScore, running_total, score_play};
use crate::stack::Stack;

/// Points and running total after a card is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Points earned by the card, by category.
    pub score: PlayScore,
    /// Running total of the current play, including the card.
    pub total: u32,
}

impl PlayOutcome {
    /// Total points earned by the card.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.score.total()
    }
}

/// Pegging accumulator for one play phase.
///
/// Cards played since the last reset to zero form the current play; cards from
/// finished plays of the same phase are kept, in order, as past plays. Past
/// plays are bookkeeping only and never scored again.
///
/// The accumulator does not check legality: the caller decides when a card
/// may be played and when the count goes back to zero.
///
/// ```
/// use cribrs::{Card, Pegging, Rank, Suit};
///
/// let mut pegging = Pegging::new();
/// assert_eq!(pegging.play(Card::new(Rank::Ace, Suit::Spades)).points(), 0);
/// assert_eq!(pegging.play(Card::new(Rank::Ace, Suit::Hearts)).points(), 2);
///
/// let outcome = pegging.play(Card::new(Rank::Ace, Suit::Clubs));
/// assert_eq!(outcome.points(), 6);
/// assert_eq!(outcome.total, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pegging {
    /// Cards played since the count was last reset.
    current: Stack,
    /// Cards from earlier plays of this phase.
    past: Stack,
    /// Scoring options.
    options: ScoringOptions,
}

impl Pegging {
    /// Creates an empty accumulator with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty accumulator with the given options.
    #[must_use]
    pub const fn with_options(options: ScoringOptions) -> Self {
        Self {
            current: Stack::new(),
            past: Stack::new(),
            options,
        }
    }

    /// Plays `card` and scores it against the current play.
    pub fn play(&mut self, card: Card) -> PlayOutcome {
        self.current.push(card);

        let score = score_play(self.current.cards());
        let total = self.running_total();
        log::debug!("played {card}: {score:?}, total {total}");

        PlayOutcome { score, total }
    }

    /// Ends the current play: its cards move to the past plays and the count
    /// starts again from zero.
    ///
    /// Call this when the total reaches the play limit or nobody can play.
    pub fn new_play(&mut self) {
        log::trace!("new play after [{}]", self.current);
        self.current.drain_into(&mut self.past);
    }

    /// Empties both the current and the past plays, e.g. for a new deal.
    pub fn reset(&mut self) {
        self.current.clear();
        self.past.clear();
    }

    /// Running total of the current play.
    #[must_use]
    pub fn running_total(&self) -> u32 {
        running_total(self.current.cards())
    }

    /// Returns whether `card` keeps the running total within the play limit.
    #[must_use]
    pub fn can_play(&self, card: &Card) -> bool {
        self.running_total() + u32::from(card.point_value()) <= self.options.play_limit
    }

    /// Cards played since the count was last reset.
    #[must_use]
    pub const fn current_play(&self) -> &Stack {
        &self.current
    }

    /// Cards from earlier plays of this phase, in play order.
    #[must_use]
    pub const fn past_plays(&self) -> &Stack {
        &self.past
    }

    /// Returns the scoring options.
    #[must_use]
    pub const fn options(&self) -> &ScoringOptions {
        &self.options
    }
}
