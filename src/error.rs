//! Error types for card, deck and hand operations.

use thiserror::Error;

use crate::card::{Card, Color, Suit};

/// Errors that can occur while parsing a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Token is not exactly three characters long.
    #[error("card token must be 3 characters, got {0}")]
    WrongLength(usize),
    /// Unknown rank symbol.
    #[error("unknown rank symbol {0:?}")]
    UnknownRank(char),
    /// Unknown suit letter.
    #[error("unknown suit letter {0:?}")]
    UnknownSuit(char),
    /// Unknown color letter.
    #[error("unknown color letter {0:?}")]
    UnknownColor(char),
    /// Color letter does not match the suit.
    #[error("{} cannot be {}", .suit.name(), .color.name())]
    ColorMismatch {
        /// The parsed suit.
        suit: Suit,
        /// The parsed color.
        color: Color,
    },
}

/// Unknown ace mode name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown ace mode, expected one of low, high, numeric-low, numeric-high")]
pub struct UnknownAceMode;

/// Reasons a card entry from an input source is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryError {
    /// Entry is not exactly two characters long.
    #[error("entry must be 2 characters, got {0}")]
    WrongLength(usize),
    /// Unknown rank character.
    #[error("unknown rank {0:?}")]
    UnknownRank(char),
    /// Unknown suit character.
    #[error("unknown suit {0:?}")]
    UnknownSuit(char),
    /// Card is not in the hand.
    #[error("{0} not in hand")]
    NotInHand(Card),
    /// Card is not in the remaining pile (already dealt).
    #[error("{0} already dealt")]
    NotInDeck(Card),
}

/// Errors that can occur while acquiring cards from an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input source has no more entries.
    #[error("input source closed")]
    Closed,
    /// The retry limit was reached without a valid entry.
    #[error("no valid entry after {0} attempts")]
    TooManyAttempts(u32),
}

/// Errors that can occur when building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A deck needs at least one copy of the 52-card set.
    #[error("deck needs at least one copy")]
    NoCopies,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards remaining.
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards remaining in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during hand operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Combination size exceeds the hand size.
    #[error("cannot choose {k} cards from a hand of {len}")]
    CombinationSize {
        /// Requested subset size.
        k: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// More cards requested to play than the hand holds.
    #[error("cannot play {requested} cards from a hand of {len}")]
    PlayCount {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// Input source failed.
    #[error(transparent)]
    Input(#[from] InputError),
}
