//! A rule engine and computer opponent for the Bluff card game, with
//! optional `no_std` support.
//!
//! Two players, a human and the computer, take turns putting cards face
//! down while claiming they all share the active rank. The opponent may call
//! bluff; whoever is wrong takes the whole pile. The first player to empty
//! their hand wins.
//!
//! The crate provides a [`Game`] type that drives the full turn flow for a
//! user interface, and a [`Table`] state object with the same operations for
//! callers that manage the random source and opponent themselves.
//!
//! # Example
//!
//! ```
//! use bluffrs::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let first = game.human_hand().cards()[0].id;
//! let outcome = game.play_human_cards(&[first]).unwrap();
//! assert_eq!(outcome.played.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pile;
pub mod policy;
pub mod result;
pub mod sequencer;
mod sync;

// Re-export main types
pub use card::{CARDS_PER_RANK, Card, CardId, DECK_SIZE, RANK_COUNT, Rank, Suit};
pub use deck::Deck;
pub use error::{ChallengeError, PlayError, PolicyError};
pub use game::{Claim, Game, GameState, Player, Snapshot, Table};
pub use hand::Hand;
pub use options::GameOptions;
pub use pile::{Pile, Play};
pub use policy::{ComputerPolicy, OpponentPolicy, OwnPlay};
pub use result::{ChallengeOutcome, ComputerPlay, PlayOutcome, Resolution};
pub use sequencer::RankSequencer;
