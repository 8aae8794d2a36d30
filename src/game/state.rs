//! Game state types.

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The human at the interface.
    Human,
    /// The computer opponent.
    Computer,
}

impl Player {
    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => f.write_str("human"),
            Self::Computer => f.write_str("computer"),
        }
    }
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The pile is empty and the human plays next.
    AwaitingHumanPlay,
    /// The computer's play is on the pile; the human may call bluff or play on.
    PendingChallengeDecision,
    /// A player has emptied their hand.
    GameOver {
        /// The winning player.
        winner: Player,
    },
}

impl GameState {
    /// Returns the winner if the game is over.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Returns whether the game is over.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::GameOver { .. })
    }
}

/// The claim standing on top of the pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    /// Who made the claim.
    pub player: Player,
    /// The rank claimed.
    pub rank: Rank,
    /// How many cards were claimed.
    pub count: usize,
}

/// A consistent view of the game for a collaborator to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current game state.
    pub state: GameState,
    /// The rank to claim next.
    pub active_rank: Rank,
    /// The human's cards.
    pub human_hand: Vec<Card>,
    /// Number of cards the computer holds.
    pub computer_cards: usize,
    /// Number of cards in the pile.
    pub pile_size: usize,
    /// The most recent unresolved claim.
    pub last_claim: Option<Claim>,
}
