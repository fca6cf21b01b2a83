//! Scoring configuration options.

/// Configuration options for hand and pegging scoring.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::ScoringOptions;
///
/// let options = ScoringOptions::default()
///     .with_play_limit(31)
///     .with_nobs(1)
///     .with_crib_flush_requires_starter(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoringOptions {
    /// Highest running total a play may reach.
    ///
    /// Only consulted by [`Pegging::can_play`](crate::Pegging::can_play);
    /// scoring itself never rejects a card.
    pub play_limit: u32,
    /// Points for holding the jack of the starter's suit.
    pub nobs: u32,
    /// Whether a crib flush must include the starter.
    ///
    /// When `false` the crib follows the same flush rule as a hand.
    pub crib_flush_requires_starter: bool,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            play_limit: 31,
            nobs: 1,
            crib_flush_requires_starter: true,
        }
    }
}

impl ScoringOptions {
    /// Sets the running total ceiling for the play.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::ScoringOptions;
    ///
    /// let options = ScoringOptions::default().with_play_limit(61);
    /// assert_eq!(options.play_limit, 61);
    /// ```
    #[must_use]
    pub const fn with_play_limit(mut self, limit: u32) -> Self {
        self.play_limit = limit;
        self
    }

    /// Sets the points awarded for nobs.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::ScoringOptions;
    ///
    /// let options = ScoringOptions::default().with_nobs(2);
    /// assert_eq!(options.nobs, 2);
    /// ```
    #[must_use]
    pub const fn with_nobs(mut self, points: u32) -> Self {
        self.nobs = points;
        self
    }

    /// Sets whether a crib flush must include the starter.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::ScoringOptions;
    ///
    /// let options = ScoringOptions::default().with_crib_flush_requires_starter(false);
    /// assert!(!options.crib_flush_requires_starter);
    /// ```
    #[must_use]
    pub const fn with_crib_flush_requires_starter(mut self, required: bool) -> Self {
        self.crib_flush_requires_starter = required;
        self
    }
}
