//! Player hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardId, Rank};
use crate::error::PlayError;

/// The cards currently owned by one player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds every card from `cards` to the hand.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds the card with the given id.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|card| card.id == id)
    }

    /// Returns the card with the given id, if held.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Returns the held cards of `rank`, in hand order.
    pub fn matching(&self, rank: Rank) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |card| card.rank == rank)
    }

    /// Counts the held cards of `rank`.
    #[must_use]
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.matching(rank).count()
    }

    /// Sorts the hand by rank, then suit.
    pub fn sort(&mut self) {
        self.cards.sort_by_key(|card| (card.rank, card.suit));
    }

    /// Removes the cards with the given ids and returns them in selection
    /// order.
    ///
    /// The removal is all-or-nothing: the hand is untouched on error.
    ///
    /// # Errors
    ///
    /// Returns an error if `ids` is empty, names a card twice, or names a
    /// card the hand does not hold.
    pub fn take(&mut self, ids: &[CardId]) -> Result<Vec<Card>, PlayError> {
        if ids.is_empty() {
            return Err(PlayError::NoCardsSelected);
        }

        for (i, id) in ids.iter().enumerate() {
            if ids[..i].contains(id) {
                return Err(PlayError::DuplicateCard(*id));
            }
            if !self.contains(*id) {
                return Err(PlayError::CardNotInHand(*id));
            }
        }

        let mut taken = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(index) = self.cards.iter().position(|card| card.id == *id) {
                taken.push(self.cards.remove(index));
            }
        }

        Ok(taken)
    }

    /// Removes and returns every card in the hand.
    pub fn take_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }
}
