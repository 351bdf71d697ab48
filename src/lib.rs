//! Playing-card decks and hands for card-game simulations, with optional
//! `no_std` support.
//!
//! The crate provides a [`Deck`] that deals into [`Hand`]s, valuation of cards
//! under several ace conventions ([`AceMode`]), enumeration of sub-hands, and
//! batch lookups over 3-character card tokens in [`codec`].
//!
//! Operations that need a card named from outside the program (discarding,
//! playing, recording a live deal) take a [`CardInput`] and retry one entry at
//! a time according to a [`RetryPolicy`].
//!
//! # Example
//!
//! ```
//! use deckrs::{AceMode, Deck};
//! use deckrs::session::{create_hands, deal_round};
//!
//! let mut deck = Deck::standard(42);
//! deck.shuffle();
//!
//! let mut hands = create_hands(2);
//! deal_round(&mut hands, &mut deck, 5).unwrap();
//!
//! let total = hands[0].total(AceMode::High);
//! assert!(total >= 5);
//! assert_eq!(deck.dealt().len(), 10);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod codec;
pub mod deck;
pub mod error;
pub mod hand;
pub mod input;
pub mod options;
pub mod session;

// Re-export main types
pub use card::{AceMode, Card, Color, DECK_SIZE, Rank, Suit};
pub use deck::{ColorCounts, Deck, DeckSummary, SuitCounts};
pub use error::{
    DealError, DeckError, EntryError, HandError, InputError, ParseCardError, UnknownAceMode,
};
pub use hand::Hand;
pub use input::{CardInput, ScriptedInput};
pub use options::{DeckOptions, DepletionPolicy, RetryPolicy};
