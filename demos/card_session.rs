//! Console card session example.
//!
//! Deals a few hands from a shuffled deck, then lets you record cards seen at a
//! live table, discard, and play. Set `RUST_LOG=deckrs=debug` to watch the
//! library's diagnostics.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::session::{create_hands, deal_round};
use deckrs::{AceMode, Card, CardInput, Deck, EntryError, Hand, RetryPolicy};
use tracing_subscriber::EnvFilter;

/// Reads card entries from standard input. Typing `q` closes the input.
struct ConsoleInput;

impl CardInput for ConsoleInput {
    fn request_entry(&mut self) -> Option<String> {
        let line = prompt_line("Card (e.g. AS, TH, q to quit): ");
        if line.is_empty() || line == "q" {
            None
        } else {
            Some(line)
        }
    }

    fn rejected(&mut self, entry: &str, reason: &EntryError) {
        println!("{entry}: {reason}");
    }

    fn accepted(&mut self, card: Card) {
        println!("-> {} of {}", card.rank.label(), card.suit.name());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::standard(seed);
    deck.shuffle();

    let mut hands = create_hands(3);
    if let Err(err) = deal_round(&mut hands, &mut deck, 5) {
        println!("Deal error: {err}");
        return;
    }

    for (index, hand) in hands.iter_mut().enumerate() {
        hand.sort(true);
        print_hand(index, hand);
    }

    let mut input = ConsoleInput;
    let retry = RetryPolicy::default();

    println!("\nRecord a card dealt at the table:");
    match deck.record_dealt(&mut input, retry) {
        Ok(card) => println!("Recorded {card}, {} cards remain.", deck.len()),
        Err(err) => println!("Input error: {err}"),
    }

    let hand = &mut hands[0];
    println!("\nDiscard a card from hand 0:");
    if let Err(err) = hand.discard(&mut input, retry) {
        println!("Input error: {err}");
        return;
    }

    println!("\nPlay two cards from hand 0:");
    match hand.play(2, &mut input, retry) {
        Ok(cards) => println!("Played {}", format_cards(&cards)),
        Err(err) => println!("Play error: {err}"),
    }
    print_hand(0, hand);

    if let Ok(pairs) = hand.combinations(2) {
        println!("\nPairs left in hand 0:");
        for pair in pairs {
            println!("  {}", format_cards(&pair));
        }
    }

    let summary = deck.summarize(AceMode::Low);
    println!(
        "\nDeck: {} cards ({} black, {} red), value {}",
        deck.len(),
        summary.colors.black,
        summary.colors.red,
        summary.values.iter().map(|&v| u32::from(v)).sum::<u32>()
    );
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

fn print_hand(index: usize, hand: &Hand) {
    println!(
        "Hand {}: {} | total {} (ace high {})",
        index,
        hand.labels().join(", "),
        hand.total(AceMode::Low),
        hand.total(AceMode::High)
    );
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
