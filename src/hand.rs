//! Player hands.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use itertools::Itertools;
use tracing::debug;

use crate::card::{AceMode, Card, take_first};
use crate::error::{EntryError, HandError, InputError, ParseCardError};
use crate::input::{CardInput, acquire};
use crate::options::RetryPolicy;

/// A player's hand.
///
/// Cards keep the order they were added in until [`sort`](Self::sort) is
/// called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates a hand from card tokens.
    ///
    /// ```
    /// use deckrs::Hand;
    ///
    /// let hand = Hand::from_tokens(&["KSB", "AHR"]).unwrap();
    /// assert_eq!(hand.len(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first token parse error. A hand never holds a malformed
    /// card, so totals never have to skip one.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ParseCardError> {
        let cards = tokens
            .iter()
            .map(|token| Card::from_token(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cards })
    }

    /// Adds cards to the end of the hand, in order.
    pub fn add(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Sorts the hand by rank only, keeping the relative order of equal
    /// ranks. Aces sort below twos unless `ace_high` is set.
    pub fn sort(&mut self, ace_high: bool) {
        self.cards.sort_by_key(|card| card.rank.order(ace_high));
    }

    /// Sum of the card values under `mode`.
    #[must_use]
    pub fn total(&self, mode: AceMode) -> u32 {
        self.cards.iter().map(|card| u32::from(card.value(mode))).sum()
    }

    /// Value of each card under `mode`, in hand order.
    #[must_use]
    pub fn values(&self, mode: AceMode) -> Vec<u8> {
        self.cards.iter().map(|card| card.value(mode)).collect()
    }

    /// Listing labels such as `"10 Hearts"`, in hand order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.cards.iter().map(|card| card.name()).collect()
    }

    /// Removes the first occurrence of `card`.
    ///
    /// Returns `false` if the hand does not hold it.
    pub fn remove(&mut self, card: Card) -> bool {
        take_first(&mut self.cards, card).is_some()
    }

    /// Asks `input` for a card to discard and removes it.
    ///
    /// A card the hand does not hold is reported back as
    /// [`EntryError::NotInHand`] and another entry is requested.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if no held card is entered.
    pub fn discard<I>(&mut self, input: &mut I, retry: RetryPolicy) -> Result<Card, InputError>
    where
        I: CardInput + ?Sized,
    {
        let card = self.take_from_input(input, retry)?;
        debug!(%card, remaining = self.cards.len(), "card discarded");
        Ok(card)
    }

    /// Asks `input` for `n` cards to play and removes them.
    ///
    /// Exactly `n` cards are returned, in entry order. Every miss is
    /// reported and re-requested rather than counted as a play.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::PlayCount`] before requesting anything if the hand
    /// holds fewer than `n` cards, or [`HandError::Input`] if the input fails.
    /// On an input failure the hand is restored, including cards already
    /// entered for this play.
    pub fn play<I>(&mut self, n: usize, input: &mut I, retry: RetryPolicy) -> Result<Vec<Card>, HandError>
    where
        I: CardInput + ?Sized,
    {
        if n > self.cards.len() {
            return Err(HandError::PlayCount {
                requested: n,
                len: self.cards.len(),
            });
        }

        let held = self.cards.clone();
        let mut plays = Vec::with_capacity(n);
        for _ in 0..n {
            match self.take_from_input(input, retry) {
                Ok(card) => plays.push(card),
                Err(err) => {
                    self.cards = held;
                    return Err(err.into());
                }
            }
        }
        debug!(played = plays.len(), remaining = self.cards.len(), "cards played");
        Ok(plays)
    }

    fn take_from_input<I>(&mut self, input: &mut I, retry: RetryPolicy) -> Result<Card, InputError>
    where
        I: CardInput + ?Sized,
    {
        let cards = &mut self.cards;
        acquire(input, retry, |card| {
            take_first(cards, card).ok_or(EntryError::NotInHand(card))
        })
    }

    /// All `k`-card subsets of the hand.
    ///
    /// Subsets are listed in lexicographic order of hand positions, and each
    /// subset keeps hand order.
    ///
    /// ```
    /// use deckrs::Hand;
    ///
    /// let hand = Hand::from_tokens(&["ASB", "2SB", "3SB", "4SB"]).unwrap();
    /// assert_eq!(hand.combinations(2).unwrap().len(), 6);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CombinationSize`] if `k` exceeds the hand size.
    pub fn combinations(&self, k: usize) -> Result<Vec<Vec<Card>>, HandError> {
        if k > self.cards.len() {
            return Err(HandError::CombinationSize {
                k,
                len: self.cards.len(),
            });
        }

        Ok(self.cards.iter().copied().combinations(k).collect())
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}
