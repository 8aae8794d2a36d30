use rand::Rng;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::pile::Pile;
use crate::sequencer::RankSequencer;

use super::state::{Claim, GameState, Player, Snapshot};

/// The complete state of one game.
///
/// Every rule transition is a method on the table that takes the opponent
/// policy and random source explicitly, so independent tables never share
/// anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// The human's hand.
    pub human: Hand,
    /// The computer's hand.
    pub computer: Hand,
    /// Cards played since the last resolved challenge.
    pub pile: Pile,
    /// The active claimed rank.
    pub sequencer: RankSequencer,
    /// Current game state.
    pub state: GameState,
    /// Whether the human hand is kept sorted.
    pub sort_human_hand: bool,
}

impl Table {
    /// Deals a freshly shuffled deck into two 26-card hands.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R, sort_human_hand: bool) -> Self {
        let mut deck = Deck::shuffled(rng);
        let (human, computer) = deck.deal();
        Self::from_hands(human, computer, sort_human_hand)
    }

    /// Creates a table from explicit hands with an empty pile and the rank
    /// sequence at Two.
    #[must_use]
    pub fn from_hands(human: Hand, computer: Hand, sort_human_hand: bool) -> Self {
        let mut table = Self {
            human,
            computer,
            pile: Pile::new(),
            sequencer: RankSequencer::new(),
            state: GameState::AwaitingHumanPlay,
            sort_human_hand,
        };
        table.tidy_human_hand();
        table
    }

    /// Returns the hand of `player`.
    #[must_use]
    pub const fn hand(&self, player: Player) -> &Hand {
        match player {
            Player::Human => &self.human,
            Player::Computer => &self.computer,
        }
    }

    /// Borrows the hand of `player` together with the pile.
    pub(super) fn hand_and_pile(&mut self, player: Player) -> (&mut Hand, &mut Pile) {
        match player {
            Player::Human => (&mut self.human, &mut self.pile),
            Player::Computer => (&mut self.computer, &mut self.pile),
        }
    }

    /// Returns the total number of cards on the table.
    ///
    /// This is always [`DECK_SIZE`] for a dealt game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.human.len() + self.computer.len() + self.pile.len()
    }

    /// Returns whether no card has been lost or duplicated.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        self.total_cards() == DECK_SIZE
    }

    pub(super) fn tidy_human_hand(&mut self) {
        if self.sort_human_hand {
            self.human.sort();
        }
    }

    /// Ends the game if a hand is empty. Only called where the pile has just
    /// been resolved.
    pub(super) fn check_winner(&mut self) -> Option<Player> {
        let winner = if self.human.is_empty() {
            Some(Player::Human)
        } else if self.computer.is_empty() {
            Some(Player::Computer)
        } else {
            None
        };

        if let Some(winner) = winner {
            self.finish(winner);
        }
        winner
    }

    pub(super) fn finish(&mut self, winner: Player) {
        tracing::info!(%winner, "game over");
        self.state = GameState::GameOver { winner };
    }

    /// Returns a consistent view of the table.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            active_rank: self.sequencer.current(),
            human_hand: self.human.cards().to_vec(),
            computer_cards: self.computer.len(),
            pile_size: self.pile.len(),
            last_claim: self.pile.last_play().map(|play| Claim {
                player: play.player,
                rank: play.claimed,
                count: play.len(),
            }),
        }
    }
}
