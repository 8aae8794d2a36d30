//! Computer opponent policy tests.

use bluffrs::{
    Card, ComputerPolicy, GameOptions, Hand, OpponentPolicy, PolicyError, Rank, Suit,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A generator that returns the same word forever.
struct FixedRng(u64);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(self.0 as u8);
    }
}

/// Always passes a `random_bool` draw with non-zero probability.
const LUCKY: u64 = 0;
/// Always fails a `random_bool` draw with probability below one.
const UNLUCKY: u64 = u64::MAX;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::standard(rank, suit)
}

fn hand(cards: &[(Rank, Suit)]) -> Hand {
    Hand::from_cards(cards.iter().map(|&(rank, suit)| card(rank, suit)).collect())
}

#[test]
fn challenges_impossible_claims() {
    let mut policy = ComputerPolicy::default();
    let sevens = hand(&[
        (Rank::Seven, Suit::Hearts),
        (Rank::Seven, Suit::Clubs),
        (Rank::Seven, Suit::Spades),
        (Rank::King, Suit::Hearts),
    ]);

    // Only one Seven can be outside the computer's hand.
    let mut rng = FixedRng(UNLUCKY);
    assert!(policy.decide_challenge(2, &sevens, Rank::Seven, &mut rng));
    assert!(!policy.decide_challenge(1, &sevens, Rank::Seven, &mut rng));

    let all_sevens = hand(&[
        (Rank::Seven, Suit::Hearts),
        (Rank::Seven, Suit::Diamonds),
        (Rank::Seven, Suit::Clubs),
        (Rank::Seven, Suit::Spades),
    ]);
    assert!(policy.decide_challenge(1, &all_sevens, Rank::Seven, &mut rng));
}

#[test]
fn large_claims_are_challenged_by_chance() {
    let mut policy = ComputerPolicy::default();
    let nothing = hand(&[(Rank::Ace, Suit::Hearts)]);

    assert!(policy.decide_challenge(3, &nothing, Rank::Two, &mut FixedRng(LUCKY)));
    assert!(!policy.decide_challenge(3, &nothing, Rank::Two, &mut FixedRng(UNLUCKY)));
    assert!(!policy.decide_challenge(2, &nothing, Rank::Two, &mut FixedRng(LUCKY)));
    assert!(!policy.decide_challenge(1, &nothing, Rank::Two, &mut FixedRng(LUCKY)));
}

#[test]
fn zero_probability_never_challenges_possible_claims() {
    let options = GameOptions::default().with_challenge_probability(0.0);
    let mut policy = ComputerPolicy::from_options(&options);
    let nothing = hand(&[(Rank::Ace, Suit::Hearts)]);

    assert!(!policy.decide_challenge(4, &nothing, Rank::Two, &mut FixedRng(LUCKY)));
}

#[test]
fn out_of_range_probabilities_are_tamed() {
    let nothing = hand(&[(Rank::Ace, Suit::Hearts)]);

    let nan = GameOptions::default().with_challenge_probability(f64::NAN);
    let mut policy = ComputerPolicy::from_options(&nan);
    assert_eq!(policy, ComputerPolicy::from_options(&nan.with_challenge_probability(0.0)));
    assert!(!policy.decide_challenge(4, &nothing, Rank::Two, &mut FixedRng(LUCKY)));

    let huge = GameOptions::default().with_challenge_probability(f64::INFINITY);
    let mut policy = ComputerPolicy::from_options(&huge);
    assert!(policy.decide_challenge(3, &nothing, Rank::Two, &mut FixedRng(UNLUCKY)));

    let negative = GameOptions::default().with_challenge_probability(-2.0);
    let mut policy = ComputerPolicy::from_options(&negative);
    assert!(!policy.decide_challenge(3, &nothing, Rank::Two, &mut FixedRng(LUCKY)));
}

#[test]
fn suspicion_rate_is_roughly_thirty_percent() {
    let mut policy = ComputerPolicy::default();
    let nothing = hand(&[(Rank::Ace, Suit::Hearts)]);
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    let challenged = (0..10_000)
        .filter(|_| policy.decide_challenge(3, &nothing, Rank::Two, &mut rng))
        .count();
    assert!((2_500..3_500).contains(&challenged), "{challenged}");
}

#[test]
fn plays_matching_cards_honestly() {
    let mut policy = ComputerPolicy::default();
    let cards = hand(&[
        (Rank::Five, Suit::Hearts),
        (Rank::Nine, Suit::Clubs),
        (Rank::Five, Suit::Spades),
        (Rank::Five, Suit::Diamonds),
        (Rank::Jack, Suit::Hearts),
    ]);

    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let play = policy.decide_play(&cards, Rank::Five, &mut rng).unwrap();

        assert!(!play.bluffing);
        assert!((1..=3).contains(&play.cards.len()));
        for id in &play.cards {
            assert_eq!(cards.get(*id).map(|c| c.rank), Some(Rank::Five));
        }
    }

    let first = policy
        .decide_play(&cards, Rank::Five, &mut FixedRng(LUCKY))
        .unwrap();
    assert_eq!(first.cards, vec![card(Rank::Five, Suit::Hearts).id]);
}

#[test]
fn bluffs_with_up_to_three_distinct_cards() {
    let mut policy = ComputerPolicy::default();
    let cards = hand(&[
        (Rank::Three, Suit::Hearts),
        (Rank::Four, Suit::Clubs),
        (Rank::Six, Suit::Spades),
        (Rank::Eight, Suit::Diamonds),
        (Rank::Jack, Suit::Hearts),
    ]);
    let mut sizes = [0usize; 4];

    for seed in 0..300 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let play = policy.decide_play(&cards, Rank::Two, &mut rng).unwrap();

        assert!(play.bluffing);
        assert!((1..=3).contains(&play.cards.len()));
        let mut unique = play.cards.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), play.cards.len());
        assert!(play.cards.iter().all(|id| cards.contains(*id)));
        sizes[play.cards.len()] += 1;
    }

    assert!(sizes[1] > 0 && sizes[2] > 0 && sizes[3] > 0);
}

#[test]
fn bluff_size_is_capped_by_hand_and_options() {
    let mut policy = ComputerPolicy::default();
    let small = hand(&[(Rank::Three, Suit::Hearts), (Rank::Four, Suit::Clubs)]);

    let options = GameOptions::default().with_max_bluff_cards(1);
    let mut cautious = ComputerPolicy::from_options(&options);
    let big = hand(&[
        (Rank::Three, Suit::Hearts),
        (Rank::Four, Suit::Clubs),
        (Rank::Six, Suit::Spades),
    ]);

    for seed in 0..100 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let play = policy.decide_play(&small, Rank::Ace, &mut rng).unwrap();
        assert!(play.cards.len() <= 2);

        let play = cautious.decide_play(&big, Rank::Ace, &mut rng).unwrap();
        assert_eq!(play.cards.len(), 1);
    }
}

#[test]
fn empty_hand_cannot_play() {
    let mut policy = ComputerPolicy::default();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    assert_eq!(
        policy
            .decide_play(&Hand::new(), Rank::Two, &mut rng)
            .unwrap_err(),
        PolicyError::EmptyHand
    );
}
