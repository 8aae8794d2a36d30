use rand::Rng;

use crate::card::CardId;
use crate::error::PlayError;
use crate::policy::OpponentPolicy;
use crate::result::{ComputerPlay, PlayOutcome};

use super::{GameState, Player, Table};

impl Table {
    /// The human plays the selected cards, claiming the active rank.
    ///
    /// If the computer has already played its last cards, this play leaves
    /// its claim standing and the computer wins without looking at the new
    /// cards. Otherwise the computer decides whether to challenge. If it
    /// does, the play is revealed and resolved and the human plays next on
    /// an empty pile.
    /// If it does not, the computer plays its own cards on top and the human
    /// may call bluff on them.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the selection is empty or
    /// repeats a card, a selected card is not in the human hand, or the
    /// policy fails. The table is unchanged then.
    pub fn play_human_cards<P, R>(
        &mut self,
        ids: &[CardId],
        policy: &mut P,
        rng: &mut R,
    ) -> Result<PlayOutcome, PlayError>
    where
        P: OpponentPolicy,
        R: Rng + ?Sized,
    {
        if self.state.is_over() {
            return Err(PlayError::GameOver);
        }

        let checkpoint = self.clone();
        let outcome = self.apply_human_play(ids, policy, rng);
        if outcome.is_err() {
            *self = checkpoint;
        }
        outcome
    }

    fn apply_human_play<P, R>(
        &mut self,
        ids: &[CardId],
        policy: &mut P,
        rng: &mut R,
    ) -> Result<PlayOutcome, PlayError>
    where
        P: OpponentPolicy,
        R: Rng + ?Sized,
    {
        let claimed = self.sequencer.current();
        let played = self
            .pile
            .play_from(&mut self.human, Player::Human, claimed, ids)?
            .cards
            .clone();
        self.tidy_human_hand();
        tracing::debug!(count = played.len(), rank = %claimed, "human played");

        let mut challenge = None;
        let mut computer_play = None;
        let mut winner = None;

        if self.computer.is_empty() {
            // The human played over the computer's last claim, so it stands
            // and the computer went out first.
            self.finish(Player::Computer);
            winner = Some(Player::Computer);
        } else if policy.decide_challenge(played.len(), &self.computer, claimed, rng) {
            challenge = Some(self.resolve_last_play(Player::Computer)?);
            winner = self.check_winner();
            if winner.is_none() {
                self.state = GameState::AwaitingHumanPlay;
            }
        } else {
            computer_play = Some(self.computer_turn(policy, rng)?);
            self.state = GameState::PendingChallengeDecision;
        }

        Ok(PlayOutcome {
            played,
            claimed,
            challenge,
            computer_play,
            human_cards: self.human.len(),
            computer_cards: self.computer.len(),
            pile_size: self.pile.len(),
            active_rank: self.sequencer.current(),
            winner,
        })
    }

    fn computer_turn<P, R>(&mut self, policy: &mut P, rng: &mut R) -> Result<ComputerPlay, PlayError>
    where
        P: OpponentPolicy,
        R: Rng + ?Sized,
    {
        let claimed = self.sequencer.current();
        let choice = policy.decide_play(&self.computer, claimed, rng)?;
        let play = self
            .pile
            .play_from(&mut self.computer, Player::Computer, claimed, &choice.cards)?;

        tracing::debug!(
            count = play.len(),
            rank = %claimed,
            bluffing = choice.bluffing,
            "computer played"
        );

        Ok(ComputerPlay {
            claimed,
            cards: play.cards.clone(),
        })
    }
}
