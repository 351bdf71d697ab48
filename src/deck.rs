//! The deck: remaining pile, dealt pile and the random source that shuffles it.

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::card::{AceMode, Card, Color, DECK_SIZE, Rank, Suit, take_first};
use crate::error::{DealError, DeckError, EntryError, InputError};
use crate::input::{CardInput, acquire};
use crate::options::{DeckOptions, DepletionPolicy, RetryPolicy};

/// Remaining cards by color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorCounts {
    /// Black cards.
    pub black: usize,
    /// Red cards.
    pub red: usize,
}

impl ColorCounts {
    /// Returns the count for `color`.
    #[must_use]
    pub const fn get(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::Red => self.red,
        }
    }
}

/// Remaining cards by suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuitCounts {
    /// Spades.
    pub spades: usize,
    /// Diamonds.
    pub diamonds: usize,
    /// Clubs.
    pub clubs: usize,
    /// Hearts.
    pub hearts: usize,
}

impl SuitCounts {
    /// Returns the count for `suit`.
    #[must_use]
    pub const fn get(&self, suit: Suit) -> usize {
        match suit {
            Suit::Spades => self.spades,
            Suit::Diamonds => self.diamonds,
            Suit::Clubs => self.clubs,
            Suit::Hearts => self.hearts,
        }
    }

    const fn slot(&mut self, suit: Suit) -> &mut usize {
        match suit {
            Suit::Spades => &mut self.spades,
            Suit::Diamonds => &mut self.diamonds,
            Suit::Clubs => &mut self.clubs,
            Suit::Hearts => &mut self.hearts,
        }
    }
}

/// Composition of the remaining pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSummary {
    /// Counts by color.
    pub colors: ColorCounts,
    /// Counts by suit.
    pub suits: SuitCounts,
    /// Value of each remaining card, top first.
    pub values: Vec<u8>,
}

/// A deck of one or more 52-card sets.
///
/// The top of the remaining pile is index 0. Every card that leaves the
/// remaining pile is appended to the dealt pile, so the two piles together
/// always hold the cards the deck was built with.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, top first.
    cards: Vec<Card>,
    /// Removed cards in removal order.
    dealt: Vec<Card>,
    /// Deck options.
    options: DeckOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an ordered, unshuffled deck.
    ///
    /// Cards are laid out suit by suit (spades, diamonds, clubs, hearts), each
    /// suit from ace to king, repeated `options.copies` times. `seed` drives
    /// every later [`shuffle`](Self::shuffle).
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DeckOptions};
    ///
    /// let deck = Deck::new(DeckOptions::default().with_copies(2), 42).unwrap();
    /// assert_eq!(deck.len(), 104);
    /// assert_eq!(deck.cards()[0].to_string(), "ASB");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NoCopies`] if `options.copies` is zero.
    pub fn new(options: DeckOptions, seed: u64) -> Result<Self, DeckError> {
        if options.copies == 0 {
            return Err(DeckError::NoCopies);
        }

        Ok(Self {
            cards: Self::build(options.copies),
            dealt: Vec::new(),
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Creates a single 52-card deck with default options.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self {
            cards: Self::build(1),
            dealt: Vec::new(),
            options: DeckOptions::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn build(copies: u8) -> Vec<Card> {
        let mut cards = Vec::with_capacity(copies as usize * DECK_SIZE);

        for _ in 0..copies {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        cards
    }

    /// Shuffles the remaining cards. The dealt pile is untouched.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        debug!(remaining = self.cards.len(), "deck shuffled");
    }

    /// Rebuilds the full ordered deck and clears the dealt pile.
    ///
    /// The random source keeps its state, so shuffles after a reset differ
    /// from the first ones.
    pub fn reset(&mut self) {
        self.cards = Self::build(self.options.copies);
        self.dealt.clear();
    }

    /// Deals `n` cards from the top.
    ///
    /// The cards are appended to the dealt pile and returned in dealing
    /// order. With [`DepletionPolicy::Short`] an over-request deals whatever
    /// remains and logs a warning.
    ///
    /// # Errors
    ///
    /// With [`DepletionPolicy::Strict`], returns
    /// [`DealError::NotEnoughCards`] and leaves the deck unchanged when fewer
    /// than `n` cards remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.cards.len();
        if n > remaining {
            match self.options.depletion {
                DepletionPolicy::Strict => {
                    return Err(DealError::NotEnoughCards {
                        requested: n,
                        remaining,
                    });
                }
                DepletionPolicy::Short => {
                    warn!(requested = n, remaining, "deck depleted, dealing short");
                }
            }
        }

        let dealt: Vec<Card> = self.cards.drain(..n.min(remaining)).collect();
        self.dealt.extend_from_slice(&dealt);
        debug!(dealt = dealt.len(), remaining = self.cards.len(), "cards dealt");
        Ok(dealt)
    }

    /// Moves the first occurrence of `card` to the dealt pile.
    ///
    /// Returns `false` if the card is not among the remaining cards.
    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(card) = take_first(&mut self.cards, card) {
            self.dealt.push(card);
            true
        } else {
            false
        }
    }

    /// Records cards that left the deck outside of [`deal`](Self::deal),
    /// such as cards announced by a live dealer.
    ///
    /// Each observed card still in the deck is moved to the dealt pile in
    /// order. An observed card that is not in the deck is reported to `input`
    /// as already dealt and a corrected entry is requested for that card
    /// alone; entries already applied are kept. Returns the cards moved.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if a correction cannot be obtained. Cards
    /// moved before the failure stay in the dealt pile.
    pub fn reconcile_dealt<I>(
        &mut self,
        observed: &[Card],
        input: &mut I,
        retry: RetryPolicy,
    ) -> Result<Vec<Card>, InputError>
    where
        I: CardInput + ?Sized,
    {
        let mut moved = Vec::with_capacity(observed.len());

        for &card in observed {
            let card = if let Some(card) = take_first(&mut self.cards, card) {
                card
            } else {
                let reason = EntryError::NotInDeck(card);
                warn!(%card, "observed card already dealt");
                input.rejected(&card.to_string(), &reason);
                self.take_from_input(input, retry)?
            };
            self.dealt.push(card);
            moved.push(card);
        }

        Ok(moved)
    }

    /// Requests one dealt card from `input` and moves it to the dealt pile.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if no card still in the deck is entered.
    pub fn record_dealt<I>(&mut self, input: &mut I, retry: RetryPolicy) -> Result<Card, InputError>
    where
        I: CardInput + ?Sized,
    {
        let card = self.take_from_input(input, retry)?;
        self.dealt.push(card);
        Ok(card)
    }

    fn take_from_input<I>(&mut self, input: &mut I, retry: RetryPolicy) -> Result<Card, InputError>
    where
        I: CardInput + ?Sized,
    {
        let cards = &mut self.cards;
        acquire(input, retry, |card| {
            take_first(cards, card).ok_or(EntryError::NotInDeck(card))
        })
    }

    /// Summarizes the remaining cards by color and suit, with their values
    /// under `mode`.
    #[must_use]
    pub fn summarize(&self, mode: AceMode) -> DeckSummary {
        let mut colors = ColorCounts::default();
        let mut suits = SuitCounts::default();
        let mut values = Vec::with_capacity(self.cards.len());

        for card in &self.cards {
            match card.color() {
                Color::Black => colors.black += 1,
                Color::Red => colors.red += 1,
            }
            *suits.slot(card.suit) += 1;
            values.push(card.value(mode));
        }

        DeckSummary {
            colors,
            suits,
            values,
        }
    }

    /// Returns the remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the dealt pile in removal order.
    #[must_use]
    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the deck options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }
}
