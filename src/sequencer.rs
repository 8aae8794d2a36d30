//! The active claimed rank.

use crate::card::Rank;

/// Tracks the rank currently being claimed and advances it cyclically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankSequencer {
    current: Rank,
}

impl RankSequencer {
    /// Creates a sequencer starting at Two.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(Rank::Two)
    }

    /// Creates a sequencer starting at `rank`.
    #[must_use]
    pub const fn starting_at(rank: Rank) -> Self {
        Self { current: rank }
    }

    /// Returns the active rank.
    #[must_use]
    pub const fn current(&self) -> Rank {
        self.current
    }

    /// Moves to the next rank, wrapping from Ace to Two, and returns it.
    pub const fn advance(&mut self) -> Rank {
        self.current = self.current.next();
        self.current
    }
}

impl Default for RankSequencer {
    fn default() -> Self {
        Self::new()
    }
}
