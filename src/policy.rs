//! Computer opponent decision rules.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::index;

use crate::card::{CARDS_PER_RANK, CardId, Rank};
use crate::error::PolicyError;
use crate::hand::Hand;
use crate::options::GameOptions;

/// The cards an opponent chose to put down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnPlay {
    /// Cards to play, by id.
    pub cards: Vec<CardId>,
    /// Whether the play is a bluff.
    pub bluffing: bool,
}

/// Decision rules for the computer-controlled player.
///
/// Randomness is always supplied by the caller, so a seeded generator makes
/// every decision reproducible.
pub trait OpponentPolicy {
    /// Decides whether to challenge a claim of `claimed_count` cards of
    /// `active` rank, knowing only the opponent's own `hand`.
    fn decide_challenge<R: Rng + ?Sized>(
        &mut self,
        claimed_count: usize,
        hand: &Hand,
        active: Rank,
        rng: &mut R,
    ) -> bool;

    /// Chooses the cards to play from `hand` while `active` is claimed.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::EmptyHand`] if `hand` is empty.
    fn decide_play<R: Rng + ?Sized>(
        &mut self,
        hand: &Hand,
        active: Rank,
        rng: &mut R,
    ) -> Result<OwnPlay, PolicyError>;
}

/// The standard computer opponent.
///
/// It challenges claims that cannot be true given its own cards, sometimes
/// challenges large claims, plays honestly whenever it can and otherwise
/// bluffs with a few random cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputerPolicy {
    challenge_probability: f64,
    suspicious_claim: usize,
    max_bluff_cards: usize,
}

impl ComputerPolicy {
    /// Builds the policy from game options.
    ///
    /// The challenge probability is clamped to `0.0..=1.0`; a NaN
    /// probability never challenges.
    #[must_use]
    pub fn from_options(options: &GameOptions) -> Self {
        let probability = options.challenge_probability;
        Self {
            challenge_probability: if probability.is_nan() {
                0.0
            } else {
                probability.clamp(0.0, 1.0)
            },
            suspicious_claim: options.suspicious_claim,
            max_bluff_cards: options.max_bluff_cards.max(1),
        }
    }
}

impl Default for ComputerPolicy {
    fn default() -> Self {
        Self::from_options(&GameOptions::default())
    }
}

impl OpponentPolicy for ComputerPolicy {
    fn decide_challenge<R: Rng + ?Sized>(
        &mut self,
        claimed_count: usize,
        hand: &Hand,
        active: Rank,
        rng: &mut R,
    ) -> bool {
        let own_matching = hand.count_rank(active);
        let max_possible_outside = CARDS_PER_RANK.saturating_sub(own_matching);

        if claimed_count > max_possible_outside {
            return true;
        }

        claimed_count > self.suspicious_claim && rng.random_bool(self.challenge_probability)
    }

    fn decide_play<R: Rng + ?Sized>(
        &mut self,
        hand: &Hand,
        active: Rank,
        rng: &mut R,
    ) -> Result<OwnPlay, PolicyError> {
        if hand.is_empty() {
            return Err(PolicyError::EmptyHand);
        }

        let matching: Vec<CardId> = hand.matching(active).map(|card| card.id).collect();
        if !matching.is_empty() {
            let count = rng.random_range(1..=matching.len());
            return Ok(OwnPlay {
                cards: matching[..count].to_vec(),
                bluffing: false,
            });
        }

        let limit = self.max_bluff_cards.min(hand.len());
        let count = rng.random_range(1..=limit);
        let cards = index::sample(rng, hand.len(), count)
            .into_iter()
            .map(|i| hand.cards()[i].id)
            .collect();

        Ok(OwnPlay {
            cards,
            bluffing: true,
        })
    }
}
