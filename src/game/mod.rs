//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{CardId, Rank};
use crate::error::{ChallengeError, PlayError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::policy::{ComputerPolicy, OpponentPolicy};
use crate::result::{ChallengeOutcome, PlayOutcome};
use crate::sync::Mutex;

mod challenge;
mod play;
pub mod state;
mod table;

pub use state::{Claim, GameState, Player, Snapshot};
pub use table::Table;

/// A bluff game between a human and a computer opponent.
///
/// The game owns the table, the opponent policy, and a seeded random number
/// generator. Each operation holds every lock for its whole duration, so a
/// call is one indivisible transition even when the game is shared between
/// threads.
pub struct Game<P = ComputerPolicy> {
    /// Game options.
    pub options: GameOptions,
    /// Hands, pile, active rank, and state.
    pub table: Mutex<Table>,
    /// The computer's decision rules.
    policy: Mutex<P>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed, using the standard computer
    /// opponent.
    ///
    /// # Example
    ///
    /// ```
    /// use bluffrs::{Game, GameOptions, Rank};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let snapshot = game.snapshot();
    /// assert_eq!(snapshot.human_hand.len(), 26);
    /// assert_eq!(snapshot.computer_cards, 26);
    /// assert_eq!(snapshot.active_rank, Rank::Two);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let policy = ComputerPolicy::from_options(&options);
        Self::with_policy(options, seed, policy)
    }
}

impl<P: OpponentPolicy> Game<P> {
    /// Creates a new game with the given seed and opponent policy.
    #[must_use]
    pub fn with_policy(options: GameOptions, seed: u64, policy: P) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let table = Table::deal(&mut rng, options.sort_human_hand);

        tracing::debug!(seed, "new game dealt");

        Self {
            options,
            table: Mutex::new(table),
            policy: Mutex::new(policy),
            rng: Mutex::new(rng),
        }
    }

    /// Deals a fresh game from the same random stream.
    pub fn restart(&self) {
        let mut table = self.table.lock();
        let mut rng = self.rng.lock();
        *table = Table::deal(&mut *rng, self.options.sort_human_hand);
        tracing::debug!("game restarted");
    }

    /// Plays the selected human cards, claiming the active rank.
    ///
    /// See [`Table::play_human_cards`].
    ///
    /// # Errors
    ///
    /// Returns an error if the play is rejected; the game is unchanged then.
    pub fn play_human_cards(&self, ids: &[CardId]) -> Result<PlayOutcome, PlayError> {
        let mut table = self.table.lock();
        let mut policy = self.policy.lock();
        let mut rng = self.rng.lock();

        table.play_human_cards(ids, &mut *policy, &mut *rng)
    }

    /// Calls bluff on the computer's most recent play.
    ///
    /// See [`Table::call_bluff`].
    ///
    /// # Errors
    ///
    /// Returns an error if there is nothing to challenge or the game is over;
    /// the game is unchanged then.
    pub fn call_bluff(&self) -> Result<ChallengeOutcome, ChallengeError> {
        self.table.with(Table::call_bluff)
    }

    /// Returns a consistent view of the game.
    pub fn snapshot(&self) -> Snapshot {
        self.table.with(|table| table.snapshot())
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.table.with(|table| table.state)
    }

    /// Returns the rank to claim next.
    pub fn active_rank(&self) -> Rank {
        self.table.with(|table| table.sequencer.current())
    }

    /// Returns a clone of the human hand.
    pub fn human_hand(&self) -> Hand {
        self.table.with(|table| table.human.clone())
    }

    /// Returns the number of cards the computer holds.
    pub fn computer_card_count(&self) -> usize {
        self.table.with(|table| table.computer.len())
    }

    /// Returns the number of cards in the pile.
    pub fn pile_size(&self) -> usize {
        self.table.with(|table| table.pile.len())
    }

    /// Returns the winner once the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.table.with(|table| table.state.winner())
    }
}
