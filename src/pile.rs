//! The shared face-down pile and the plays that built it.

use alloc::vec::Vec;

use crate::card::{Card, CardId, Rank};
use crate::error::{ChallengeError, PlayError};
use crate::game::Player;
use crate::hand::Hand;

/// One play: the cards a player put face down while claiming a rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    /// Who played the cards.
    pub player: Player,
    /// The rank the player claimed.
    pub claimed: Rank,
    /// The cards actually played.
    pub cards: Vec<Card>,
}

impl Play {
    /// Returns whether any played card differs from the claimed rank.
    #[must_use]
    pub fn is_bluff(&self) -> bool {
        self.cards.iter().any(|card| card.rank != self.claimed)
    }

    /// Returns the number of cards played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the play holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Cards played since the last resolved challenge.
///
/// The pile remembers each play separately so the most recent one can be
/// revealed alone, but it is always handed over as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    plays: Vec<Play>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { plays: Vec::new() }
    }

    /// Moves the selected cards from `hand` onto the pile as one play.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection is empty, repeats a card, or names a
    /// card `hand` does not hold. Neither the hand nor the pile changes then.
    pub fn play_from(
        &mut self,
        hand: &mut Hand,
        player: Player,
        claimed: Rank,
        ids: &[CardId],
    ) -> Result<&Play, PlayError> {
        let cards = hand.take(ids)?;
        self.plays.push(Play {
            player,
            claimed,
            cards,
        });
        Ok(&self.plays[self.plays.len() - 1])
    }

    /// Moves every card in the pile into `hand` and empties the pile.
    ///
    /// Returns the number of cards moved.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile is empty.
    pub fn resolve_to(&mut self, hand: &mut Hand) -> Result<usize, ChallengeError> {
        if self.is_empty() {
            return Err(ChallengeError::EmptyPile);
        }

        let moved = self.len();
        for play in self.plays.drain(..) {
            hand.extend(play.cards);
        }
        Ok(moved)
    }

    /// Returns the most recent play.
    #[must_use]
    pub fn last_play(&self) -> Option<&Play> {
        self.plays.last()
    }

    /// Returns the plays in the order they were made.
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Returns every card in the pile, oldest first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.plays.iter().flat_map(|play| play.cards.iter())
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.iter().map(Play::len).sum()
    }

    /// Returns whether the pile holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.iter().all(Play::is_empty)
    }
}
