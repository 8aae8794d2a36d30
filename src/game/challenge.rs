use crate::error::ChallengeError;
use crate::result::{ChallengeOutcome, Resolution};

use super::{GameState, Player, Table};

impl Table {
    /// Reveals the most recent play and hands the whole pile to whoever lost
    /// the challenge, then advances the active rank.
    ///
    /// Only the last play is checked, even when earlier unresolved plays sit
    /// underneath it; they travel with the pile regardless of their honesty.
    pub(super) fn resolve_last_play(
        &mut self,
        challenger: Player,
    ) -> Result<Resolution, ChallengeError> {
        let play = self.pile.last_play().ok_or(ChallengeError::EmptyPile)?;
        if play.player == challenger {
            return Err(ChallengeError::OwnPlay);
        }

        let active = self.sequencer.current();
        let challenged = play.player;
        let revealed = play.cards.clone();
        let was_bluff = revealed.iter().any(|card| card.rank != active);
        let taker = if was_bluff { challenged } else { challenger };

        let (hand, pile) = self.hand_and_pile(taker);
        let cards_taken = pile.resolve_to(hand)?;
        if taker == Player::Human {
            self.tidy_human_hand();
        }
        let next = self.sequencer.advance();

        tracing::info!(
            %challenger,
            %challenged,
            claimed = %active,
            was_bluff,
            %taker,
            cards_taken,
            next_rank = %next,
            "challenge resolved"
        );

        Ok(Resolution {
            challenger,
            challenged,
            claimed: active,
            revealed,
            was_bluff,
            taker,
            cards_taken,
        })
    }

    /// The human calls bluff on the computer's most recent play.
    ///
    /// If any revealed card differs from the active rank the computer takes
    /// the pile, otherwise the human does. Either way the pile is emptied and
    /// the active rank advances once.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the pile is empty, or the last
    /// play is the human's own. The table is unchanged then.
    pub fn call_bluff(&mut self) -> Result<ChallengeOutcome, ChallengeError> {
        if self.state.is_over() {
            return Err(ChallengeError::GameOver);
        }

        let resolution = self.resolve_last_play(Player::Human)?;
        let winner = self.check_winner();
        if winner.is_none() {
            self.state = GameState::AwaitingHumanPlay;
        }

        Ok(ChallengeOutcome {
            resolution,
            human_cards: self.human.len(),
            computer_cards: self.computer.len(),
            active_rank: self.sequencer.current(),
            winner,
        })
    }
}
