//! CLI bluff example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bluffrs::{
    Card, CardId, ChallengeOutcome, Game, GameOptions, GameState, PlayOutcome, Player,
    Resolution, Snapshot,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Bluff CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        let snapshot = game.snapshot();
        print_table(&snapshot);

        if let GameState::GameOver { winner } = snapshot.state {
            match winner {
                Player::Human => println!("Congratulations! You win!"),
                Player::Computer => println!("Computer wins! Better luck next time!"),
            }
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.restart();
                    continue;
                }
                _ => return,
            }
        }

        println!("{}", format_actions(&snapshot));
        let input = prompt_line("Action: ");
        let mut words = input.split_whitespace();

        match words.next() {
            Some("p" | "play") => {
                let Some(ids) = parse_selection(words, &snapshot.human_hand) else {
                    println!("Select cards by their position, e.g. 'p 1 3'.");
                    continue;
                };
                match game.play_human_cards(&ids) {
                    Ok(outcome) => print_play(&outcome),
                    Err(err) => println!("Play error: {err}"),
                }
            }
            Some("b" | "bluff") => match game.call_bluff() {
                Ok(outcome) => print_challenge(&outcome),
                Err(err) => println!("Call error: {err}"),
            },
            Some("q" | "quit") => return,
            _ => println!("Unknown action."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Turns 1-based positions in the displayed hand into stable card ids.
fn parse_selection<'a>(words: impl Iterator<Item = &'a str>, hand: &[Card]) -> Option<Vec<CardId>> {
    let ids: Option<Vec<CardId>> = words
        .map(|word| {
            let position = word.parse::<usize>().ok()?;
            hand.get(position.checked_sub(1)?).map(|card| card.id)
        })
        .collect();
    ids.filter(|ids| !ids.is_empty())
}

fn print_table(snapshot: &Snapshot) {
    println!(
        "\nCurrent rank: {} | Computer's cards: {} | Pile: {}",
        snapshot.active_rank, snapshot.computer_cards, snapshot.pile_size
    );
    if let Some(claim) = snapshot.last_claim {
        println!(
            "Last claim: {} played {} card(s) of rank {}",
            claim.player, claim.count, claim.rank
        );
    }
    println!("Your cards ({}):", snapshot.human_hand.len());
    let cards: Vec<String> = snapshot
        .human_hand
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{:>2}:{}", index + 1, format_card(card)))
        .collect();
    for row in cards.chunks(13) {
        println!("  {}", row.join(" "));
    }
    println!();
}

fn format_actions(snapshot: &Snapshot) -> String {
    let can_call = snapshot.state == GameState::PendingChallengeDecision;
    let parts = [
        format_action("play <positions>", "p", !snapshot.human_hand.is_empty()),
        format_action("call bluff", "b", can_call),
        format_action("quit", "q", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let text = card.to_string();
    if card.suit.is_red() {
        colorize(&text, "31")
    } else {
        text
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn print_resolution(resolution: &Resolution) {
    println!("Revealed: {}", format_cards(&resolution.revealed));
    match (resolution.challenger, resolution.was_bluff) {
        (Player::Computer, true) => println!("You were caught bluffing! Taking the pile..."),
        (Player::Computer, false) => println!("Computer was wrong! They take the pile..."),
        (Player::Human, true) => {
            println!("You caught the computer bluffing! Computer takes the pile...");
        }
        (Player::Human, false) => println!("Computer was honest! You take the pile..."),
    }
}

fn print_play(outcome: &PlayOutcome) {
    println!(
        "You play {} card(s) as rank {}.",
        outcome.played.len(),
        outcome.claimed
    );
    if let Some(resolution) = &outcome.challenge {
        println!("Computer calls BLUFF!");
        print_resolution(resolution);
    }
    if let Some(play) = &outcome.computer_play {
        println!(
            "Computer plays {} card(s) of rank {}.",
            play.cards.len(),
            play.claimed
        );
    }
}

fn print_challenge(outcome: &ChallengeOutcome) {
    print_resolution(&outcome.resolution);
    println!("Next rank: {}", outcome.active_rank);
}
