//! The 52-card deck used to set up a game.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::hand::Hand;

/// A deck of cards consumed by dealing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in the deck; the last card is the top of the deck.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled standard deck, ordered by rank then suit.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::standard(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a standard deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck from explicit cards. The last card is dealt first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the cards remaining in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draws the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals the whole deck into two hands, alternating and starting with
    /// the first hand. The deck is empty afterwards.
    pub fn deal(&mut self) -> (Hand, Hand) {
        let mut first = Hand::new();
        let mut second = Hand::new();

        while let Some(card) = self.draw() {
            first.add(card);
            if let Some(card) = self.draw() {
                second.add(card);
            }
        }

        (first, second)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
