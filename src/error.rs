//! Error types for game operations.

use thiserror::Error;

use crate::card::CardId;

/// Errors that can occur when playing cards.
///
/// Every variant leaves the game state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game has already been won.
    #[error("the game is over")]
    GameOver,
    /// No cards were selected.
    #[error("no cards selected")]
    NoCardsSelected,
    /// The same card was selected more than once.
    #[error("card {0} selected more than once")]
    DuplicateCard(CardId),
    /// A selected card is not held by the player.
    #[error("card {0} is not in the hand")]
    CardNotInHand(CardId),
    /// The opponent policy could not produce a play.
    #[error(transparent)]
    Policy(#[from] PolicyError),
    /// Resolving the opponent's challenge failed.
    #[error(transparent)]
    Challenge(#[from] ChallengeError),
}

/// Errors that can occur when calling a bluff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChallengeError {
    /// The game has already been won.
    #[error("the game is over")]
    GameOver,
    /// There is no play in the pile to challenge.
    #[error("no cards in the pile to call bluff on")]
    EmptyPile,
    /// The most recent play belongs to the challenger.
    #[error("cannot call bluff on your own play")]
    OwnPlay,
}

/// Errors that can occur when the opponent policy decides a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The hand has no cards to play.
    #[error("hand is empty")]
    EmptyHand,
}
