//! Helpers for setting up a table of hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;

/// Creates `players` empty hands.
#[must_use]
pub fn create_hands(players: usize) -> Vec<Hand> {
    (0..players).map(|_| Hand::new()).collect()
}

/// Deals `n` cards to each hand in turn.
///
/// Each hand receives all of its cards before the next hand is served, so a
/// short deck starves the later hands.
///
/// ```
/// use deckrs::Deck;
/// use deckrs::session::{create_hands, deal_round};
///
/// let mut deck = Deck::standard(7);
/// let mut hands = create_hands(4);
/// deal_round(&mut hands, &mut deck, 2).unwrap();
/// assert_eq!(deck.len(), 44);
/// ```
///
/// # Errors
///
/// Returns the [`DealError`] of the first hand the deck cannot serve under
/// a strict depletion policy. Hands served before it keep their cards.
pub fn deal_round(hands: &mut [Hand], deck: &mut Deck, n: usize) -> Result<(), DealError> {
    for hand in hands {
        let cards = deck.deal(n)?;
        hand.add(&cards);
    }
    Ok(())
}
