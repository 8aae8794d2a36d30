//! Outcome types returned by game operations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::game::Player;

/// Result of a resolved challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The player who called bluff.
    pub challenger: Player,
    /// The player whose play was challenged.
    pub challenged: Player,
    /// The rank that was claimed.
    pub claimed: Rank,
    /// The challenged play's cards, now revealed.
    pub revealed: Vec<Card>,
    /// Whether the challenged play was a bluff.
    pub was_bluff: bool,
    /// The player who took the pile.
    pub taker: Player,
    /// Number of cards the taker picked up.
    pub cards_taken: usize,
}

impl Resolution {
    /// Returns the player who won the challenge.
    #[must_use]
    pub const fn winner(&self) -> Player {
        self.taker.opponent()
    }
}

/// A play made by the computer.
///
/// The cards are face down; a collaborator showing them to the human gives
/// away whether the computer bluffed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputerPlay {
    /// The rank the computer claimed.
    pub claimed: Rank,
    /// The cards put on the pile.
    pub cards: Vec<Card>,
}

/// Result of the human playing cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The cards the human moved onto the pile.
    pub played: Vec<Card>,
    /// The rank the human claimed.
    pub claimed: Rank,
    /// The computer's challenge of the play, if it challenged.
    pub challenge: Option<Resolution>,
    /// The computer's own play, made only when it did not challenge.
    pub computer_play: Option<ComputerPlay>,
    /// Cards left in the human hand.
    pub human_cards: usize,
    /// Cards left in the computer hand.
    pub computer_cards: usize,
    /// Cards in the pile.
    pub pile_size: usize,
    /// The rank to claim next.
    pub active_rank: Rank,
    /// The winner, if the game ended.
    pub winner: Option<Player>,
}

impl PlayOutcome {
    /// Returns whether the computer challenged the play.
    #[must_use]
    pub const fn computer_challenged(&self) -> bool {
        self.challenge.is_some()
    }
}

/// Result of the human calling bluff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeOutcome {
    /// How the challenge resolved.
    pub resolution: Resolution,
    /// Cards left in the human hand.
    pub human_cards: usize,
    /// Cards left in the computer hand.
    pub computer_cards: usize,
    /// The rank to claim next.
    pub active_rank: Rank,
    /// The winner, if the game ended.
    pub winner: Option<Player>,
}
