//! Property tests over random sequences of human actions.

use bluffrs::{CardId, ChallengeError, Game, GameOptions, GameState, Player};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Action {
    Play(usize),
    CallBluff,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (1usize..=4).prop_map(Action::Play),
        1 => Just(Action::CallBluff),
    ]
}

proptest! {
    #[test]
    fn cards_are_conserved_and_rank_moves_only_on_resolution_and_winner_goes_out_first(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 1..80),
    ) {
        let game = Game::new(GameOptions::default(), seed);

        for action in actions {
            let before = game.snapshot();
            if before.state.is_over() {
                break;
            }

            match action {
                Action::Play(count) if !before.human_hand.is_empty() => {
                    let ids: Vec<CardId> = before
                        .human_hand
                        .iter()
                        .take(count)
                        .map(|card| card.id)
                        .collect();
                    let outcome = game.play_human_cards(&ids).unwrap();

                    if let Some(resolution) = &outcome.challenge {
                        prop_assert_eq!(resolution.claimed, before.active_rank);
                        prop_assert_eq!(outcome.pile_size, 0);
                        prop_assert_eq!(outcome.active_rank, before.active_rank.next());
                        prop_assert!(outcome.computer_play.is_none());
                    } else {
                        prop_assert_eq!(outcome.active_rank, before.active_rank);
                    }
                }
                _ => match game.call_bluff() {
                    Ok(outcome) => {
                        prop_assert_eq!(game.pile_size(), 0);
                        prop_assert_eq!(outcome.active_rank, before.active_rank.next());
                        prop_assert_eq!(
                            outcome.resolution.cards_taken,
                            before.pile_size
                        );
                    }
                    Err(err) => {
                        prop_assert_eq!(err, ChallengeError::EmptyPile);
                        prop_assert_eq!(game.snapshot(), before);
                    }
                },
            }

            let table = game.table.lock();
            prop_assert!(table.is_conserved());
            match table.state {
                GameState::AwaitingHumanPlay => {
                    prop_assert!(table.pile.is_empty());
                    prop_assert!(!table.human.is_empty());
                    prop_assert!(!table.computer.is_empty());
                }
                GameState::PendingChallengeDecision => {
                    prop_assert!(!table.pile.is_empty());
                }
                GameState::GameOver { winner } => {
                    prop_assert!(table.hand(winner).is_empty());
                }
            }
            // Once the computer's last claim is played over, it has won.
            if table.computer.is_empty() && table.state != GameState::PendingChallengeDecision {
                prop_assert_eq!(table.state.winner(), Some(Player::Computer));
            }
        }
    }
}
