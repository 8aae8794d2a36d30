//! Game configuration options.

/// Configuration options for a bluff game.
///
/// These tune the computer opponent and how the human hand is presented;
/// the rules themselves are fixed.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bluffrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_challenge_probability(0.5)
///     .with_max_bluff_cards(2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Chance that the computer challenges a large but possible claim.
    pub challenge_probability: f64,
    /// Claims of more than this many cards count as suspicious.
    pub suspicious_claim: usize,
    /// Most cards the computer puts down when it bluffs.
    pub max_bluff_cards: usize,
    /// Whether the human hand is kept sorted by rank and suit.
    pub sort_human_hand: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            challenge_probability: 0.3,
            suspicious_claim: 2,
            max_bluff_cards: 3,
            sort_human_hand: true,
        }
    }
}

impl GameOptions {
    /// Sets the chance of challenging a suspicious claim.
    ///
    /// Values outside `0.0..=1.0` are clamped when the policy is built, and
    /// NaN counts as `0.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use bluffrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_challenge_probability(0.0);
    /// assert_eq!(options.challenge_probability, 0.0);
    /// ```
    #[must_use]
    pub const fn with_challenge_probability(mut self, probability: f64) -> Self {
        self.challenge_probability = probability;
        self
    }

    /// Sets the claim size above which a claim counts as suspicious.
    ///
    /// # Example
    ///
    /// ```
    /// use bluffrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_suspicious_claim(3);
    /// assert_eq!(options.suspicious_claim, 3);
    /// ```
    #[must_use]
    pub const fn with_suspicious_claim(mut self, cards: usize) -> Self {
        self.suspicious_claim = cards;
        self
    }

    /// Sets the most cards the computer plays when bluffing.
    ///
    /// A value of zero is treated as one.
    ///
    /// # Example
    ///
    /// ```
    /// use bluffrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_bluff_cards(1);
    /// assert_eq!(options.max_bluff_cards, 1);
    /// ```
    #[must_use]
    pub const fn with_max_bluff_cards(mut self, cards: usize) -> Self {
        self.max_bluff_cards = cards;
        self
    }

    /// Sets whether the human hand is kept sorted.
    ///
    /// # Example
    ///
    /// ```
    /// use bluffrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_sort_human_hand(false);
    /// assert_eq!(options.sort_human_hand, false);
    /// ```
    #[must_use]
    pub const fn with_sort_human_hand(mut self, sort: bool) -> Self {
        self.sort_human_hand = sort;
        self
    }
}
