//! Deck and session integration tests.

use std::collections::{HashMap, HashSet};

use deckrs::session::{create_hands, deal_round};
use deckrs::{
    AceMode, Card, Color, DECK_SIZE, DealError, Deck, DeckError, DeckOptions, DepletionPolicy,
    EntryError, InputError, Rank, RetryPolicy, ScriptedInput, Suit,
};

mod common;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn strict_deck(seed: u64) -> Deck {
    let options = DeckOptions::default().with_depletion(DepletionPolicy::Strict);
    Deck::new(options, seed).unwrap()
}

#[test]
fn construction_order_and_counts() {
    for copies in 1..=3u8 {
        let deck = Deck::new(DeckOptions::default().with_copies(copies), 0).unwrap();
        let k = usize::from(copies);
        assert_eq!(deck.len(), DECK_SIZE * k);
        assert!(deck.dealt().is_empty());

        let mut per_suit: HashMap<Suit, usize> = HashMap::new();
        let mut per_rank: HashMap<Rank, usize> = HashMap::new();
        for c in deck.cards() {
            *per_suit.entry(c.suit).or_default() += 1;
            *per_rank.entry(c.rank).or_default() += 1;
        }
        assert!(per_suit.values().all(|&n| n == 13 * k));
        assert!(per_rank.values().all(|&n| n == 4 * k));
        assert_eq!(per_suit.len(), 4);
        assert_eq!(per_rank.len(), 13);
    }

    let deck = Deck::standard(0);
    let tokens: Vec<String> = deck.cards().iter().map(ToString::to_string).collect();
    assert_eq!(tokens[0], "ASB");
    assert_eq!(tokens[12], "KSB");
    assert_eq!(tokens[13], "ADR");
    assert_eq!(tokens[26], "ACB");
    assert_eq!(tokens[51], "KHR");
}

#[test]
fn zero_copies_is_rejected() {
    let err = Deck::new(DeckOptions::default().with_copies(0), 0).unwrap_err();
    assert_eq!(err, DeckError::NoCopies);
}

#[test]
fn deal_moves_top_cards_to_dealt() {
    let mut deck = Deck::standard(1);
    let first = deck.deal(3).unwrap();
    assert_eq!(
        first,
        vec![
            card(Rank::Ace, Suit::Spades),
            card(Rank::Two, Suit::Spades),
            card(Rank::Three, Suit::Spades),
        ]
    );
    let second = deck.deal(1).unwrap();
    assert_eq!(second, vec![card(Rank::Four, Suit::Spades)]);

    assert_eq!(deck.len(), DECK_SIZE - 4);
    assert_eq!(deck.dealt(), &[first, second].concat()[..]);
    assert_eq!(deck.cards()[0], card(Rank::Five, Suit::Spades));
}

#[test]
fn deal_arithmetic_and_disjointness() {
    let mut deck = Deck::standard(9);
    deck.shuffle();
    for n in [0, 5, 13, 40] {
        let before = deck.len();
        let dealt_before = deck.dealt().len();
        deck.deal(n).unwrap();
        assert_eq!(deck.len(), before.saturating_sub(n));
        assert_eq!(deck.dealt().len(), dealt_before + (before - deck.len()));

        let remaining: HashSet<Card> = deck.cards().iter().copied().collect();
        assert!(deck.dealt().iter().all(|c| !remaining.contains(c)));
    }
    assert!(deck.is_empty());
}

#[test]
fn dealing_everything_reproduces_the_deck() {
    let mut deck = Deck::standard(5);
    let original: Vec<Card> = deck.cards().to_vec();
    deck.shuffle();
    while !deck.is_empty() {
        deck.deal(7).unwrap();
    }

    let dealt: HashSet<Card> = deck.dealt().iter().copied().collect();
    assert_eq!(deck.dealt().len(), DECK_SIZE);
    assert_eq!(dealt, original.into_iter().collect());
}

#[test]
fn short_policy_deals_what_remains() {
    let mut deck = Deck::standard(2);
    deck.deal(50).unwrap();
    let mut last = Vec::new();
    let logs = common::capture_warnings(|| last = deck.deal(5).unwrap());
    assert_eq!(last.len(), 2);
    assert!(logs.contains("deck depleted, dealing short"));
    assert!(logs.contains("requested=5"));
    assert!(logs.contains("remaining=2"));
    assert!(deck.is_empty());
    assert_eq!(deck.dealt().len(), DECK_SIZE);
    assert!(deck.deal(1).unwrap().is_empty());
}

#[test]
fn strict_policy_refuses_over_request() {
    let mut deck = strict_deck(2);
    deck.deal(50).unwrap();
    assert_eq!(
        deck.deal(5),
        Err(DealError::NotEnoughCards {
            requested: 5,
            remaining: 2,
        })
    );
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.dealt().len(), 50);
    assert_eq!(deck.deal(2).unwrap().len(), 2);
}

#[test]
fn shuffle_preserves_multiset_and_is_seeded() {
    let mut deck = Deck::new(DeckOptions::default().with_copies(2), 11).unwrap();
    let mut before: Vec<String> = deck.cards().iter().map(ToString::to_string).collect();
    deck.shuffle();
    let shuffled: Vec<Card> = deck.cards().to_vec();
    let mut after: Vec<String> = shuffled.iter().map(ToString::to_string).collect();
    assert_ne!(before, after);

    before.sort();
    after.sort();
    assert_eq!(before, after);

    let mut twin = Deck::new(DeckOptions::default().with_copies(2), 11).unwrap();
    twin.shuffle();
    assert_eq!(twin.cards(), &shuffled[..]);

    let mut other = Deck::new(DeckOptions::default().with_copies(2), 12).unwrap();
    other.shuffle();
    assert_ne!(other.cards(), &shuffled[..]);
}

#[test]
fn shuffle_leaves_dealt_pile_alone() {
    let mut deck = Deck::standard(3);
    let dealt = deck.deal(10).unwrap();
    deck.shuffle();
    assert_eq!(deck.dealt(), &dealt[..]);
    assert_eq!(deck.len(), DECK_SIZE - 10);
}

#[test]
fn reset_restores_full_deck() {
    let mut deck = Deck::standard(3);
    deck.shuffle();
    deck.deal(20).unwrap();
    deck.reset();
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(deck.dealt().is_empty());
    assert_eq!(deck.cards(), Deck::standard(0).cards());
}

#[test]
fn remove_moves_first_occurrence() {
    let mut deck = Deck::new(DeckOptions::default().with_copies(2), 0).unwrap();
    let queen = card(Rank::Queen, Suit::Hearts);
    assert!(deck.remove(queen));
    assert!(deck.remove(queen));
    assert!(!deck.remove(queen));
    assert_eq!(deck.dealt(), &[queen, queen]);
    assert_eq!(deck.len(), 2 * DECK_SIZE - 2);
}

#[test]
fn reconcile_moves_observed_cards() {
    let mut deck = Deck::standard(0);
    let observed = [card(Rank::King, Suit::Clubs), card(Rank::Two, Suit::Hearts)];
    let mut input = ScriptedInput::default();

    let moved = deck
        .reconcile_dealt(&observed, &mut input, RetryPolicy::default())
        .unwrap();
    assert_eq!(moved, observed);
    assert_eq!(deck.dealt(), &observed);
    assert!(!deck.cards().contains(&observed[0]));
    assert!(input.rejections().is_empty());
}

#[test_log::test]
fn reconcile_retries_only_the_missing_card() {
    let mut deck = Deck::standard(0);
    let seven = card(Rank::Seven, Suit::Diamonds);
    let jack = card(Rank::Jack, Suit::Spades);
    let five = card(Rank::Five, Suit::Clubs);
    assert!(deck.remove(seven));

    // The correction is first entered as the same dealt card, then garbage.
    let mut input = ScriptedInput::new(["7D", "zz", "5c"]);
    let moved = deck
        .reconcile_dealt(&[jack, seven], &mut input, RetryPolicy::default())
        .unwrap();

    assert_eq!(moved, vec![jack, five]);
    assert_eq!(deck.dealt(), &[seven, jack, five]);
    assert_eq!(deck.len(), DECK_SIZE - 3);

    let reasons: Vec<EntryError> = input.rejections().iter().map(|(_, r)| *r).collect();
    assert_eq!(
        reasons,
        vec![
            EntryError::NotInDeck(seven),
            EntryError::NotInDeck(seven),
            EntryError::UnknownRank('z'),
        ]
    );
    assert_eq!(input.accepted_cards(), &[five]);
}

#[test]
fn reconcile_keeps_applied_entries_on_failure() {
    let mut deck = Deck::standard(0);
    let ace = card(Rank::Ace, Suit::Hearts);
    assert!(deck.remove(ace));

    let two = card(Rank::Two, Suit::Spades);
    let mut input = ScriptedInput::default();
    let err = deck
        .reconcile_dealt(&[two, ace], &mut input, RetryPolicy::default())
        .unwrap_err();
    assert_eq!(err, InputError::Closed);
    assert_eq!(deck.dealt(), &[ace, two]);
}

#[test]
fn record_dealt_respects_retry_limit() {
    let mut deck = Deck::standard(0);
    let mut input = ScriptedInput::new(["KH", "xx", "KH", "QH"]);
    assert_eq!(
        deck.record_dealt(&mut input, RetryPolicy::limited(2)).unwrap(),
        card(Rank::King, Suit::Hearts)
    );
    assert_eq!(
        deck.record_dealt(&mut input, RetryPolicy::limited(2)),
        Err(InputError::TooManyAttempts(2))
    );
    assert_eq!(input.remaining(), 1);
    assert_eq!(deck.dealt(), &[card(Rank::King, Suit::Hearts)]);
}

#[test]
fn summarize_counts_remaining_cards() {
    let mut deck = Deck::standard(0);
    let summary = deck.summarize(AceMode::Low);
    assert_eq!(summary.colors.black, 26);
    assert_eq!(summary.colors.red, 26);
    assert_eq!(summary.suits.get(Suit::Spades), 13);
    assert_eq!(summary.values.len(), DECK_SIZE);
    assert_eq!(summary.values[..13], [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10]);

    deck.deal(13).unwrap();
    let summary = deck.summarize(AceMode::NumericHigh);
    assert_eq!(summary.colors.get(Color::Black), 13);
    assert_eq!(summary.colors.get(Color::Red), 26);
    assert_eq!(summary.suits.spades, 0);
    assert_eq!(summary.suits.diamonds, 13);
    assert_eq!(summary.values[0], 14);
    assert_eq!(summary.values.iter().map(|&v| u32::from(v)).sum::<u32>(), 3 * 104);
}

#[test]
fn deal_round_serves_hands_in_turn() {
    let mut deck = Deck::standard(21);
    deck.shuffle();
    let mut hands = create_hands(3);
    assert!(hands.iter().all(deckrs::Hand::is_empty));

    for _ in 0..3 {
        deal_round(&mut hands, &mut deck, 1).unwrap();
    }

    assert_eq!(deck.len(), DECK_SIZE - 9);
    let mut seen = HashSet::new();
    for hand in &hands {
        assert_eq!(hand.len(), 3);
        for c in hand.cards() {
            assert!(seen.insert(*c));
        }
    }
    assert_eq!(deck.dealt()[0], hands[0].cards()[0]);
    assert_eq!(deck.dealt()[1], hands[1].cards()[0]);
}

#[test]
fn deal_round_starves_later_hands() {
    let mut deck = Deck::standard(0);
    deck.deal(47).unwrap();
    let mut hands = create_hands(3);
    deal_round(&mut hands, &mut deck, 2).unwrap();
    let sizes: Vec<usize> = hands.iter().map(deckrs::Hand::len).collect();
    assert_eq!(sizes, vec![2, 2, 1]);

    let mut deck = strict_deck(0);
    deck.deal(47).unwrap();
    let mut hands = create_hands(3);
    assert_eq!(
        deal_round(&mut hands, &mut deck, 2),
        Err(DealError::NotEnoughCards {
            requested: 2,
            remaining: 1,
        })
    );
    let sizes: Vec<usize> = hands.iter().map(deckrs::Hand::len).collect();
    assert_eq!(sizes, vec![2, 2, 0]);
}
