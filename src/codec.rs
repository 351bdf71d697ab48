//! Batch lookups over card tokens and validation of short card entries.
//!
//! The batch functions never fail as a whole: a malformed token yields `None`
//! in its slot and a warning is logged, while the rest of the batch is still
//! decoded.

extern crate alloc;

use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::{AceMode, Card, Rank, Suit};
use crate::error::EntryError;

/// Decodes every token, replacing malformed ones with `None`.
#[must_use]
pub fn decode<S: AsRef<str>>(tokens: &[S]) -> Vec<Option<Card>> {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            Card::from_token(token)
                .inspect_err(|error| warn!(token, %error, "malformed card token"))
                .ok()
        })
        .collect()
}

/// Rank labels (`"A"`, `"2"`, ..., `"10"`, `"J"`, `"Q"`, `"K"`).
///
/// ```
/// use deckrs::codec::rank_of;
///
/// assert_eq!(rank_of(&["TDR", "bad"]), vec![Some("10"), None]);
/// ```
#[must_use]
pub fn rank_of<S: AsRef<str>>(tokens: &[S]) -> Vec<Option<&'static str>> {
    map_decoded(tokens, |card| card.rank.label())
}

/// Suit names.
#[must_use]
pub fn suit_of<S: AsRef<str>>(tokens: &[S]) -> Vec<Option<&'static str>> {
    map_decoded(tokens, |card| card.suit.name())
}

/// Color names.
#[must_use]
pub fn color_of<S: AsRef<str>>(tokens: &[S]) -> Vec<Option<&'static str>> {
    map_decoded(tokens, |card| card.color().name())
}

/// Numeric values under `mode`.
///
/// ```
/// use deckrs::AceMode;
/// use deckrs::codec::value_of;
///
/// assert_eq!(value_of(&["AHR", "KSB", "TDR"], AceMode::Low), vec![Some(1), Some(10), Some(10)]);
/// assert_eq!(value_of(&["AHR", "JCB"], AceMode::NumericHigh), vec![Some(14), Some(11)]);
/// ```
#[must_use]
pub fn value_of<S: AsRef<str>>(tokens: &[S], mode: AceMode) -> Vec<Option<u8>> {
    map_decoded(tokens, |card| card.value(mode))
}

fn map_decoded<S, T, F>(tokens: &[S], f: F) -> Vec<Option<T>>
where
    S: AsRef<str>,
    F: Fn(Card) -> T,
{
    decode(tokens).into_iter().map(|card| card.map(&f)).collect()
}

/// Validates a rank and suit character pair and returns the card.
///
/// Both characters are matched case-insensitively; the color is derived from
/// the suit.
///
/// # Errors
///
/// Returns [`EntryError::UnknownRank`] or [`EntryError::UnknownSuit`] for
/// characters outside the alphabets.
pub fn validate_and_normalize_entry(rank: char, suit: char) -> Result<Card, EntryError> {
    let rank = Rank::from_symbol(rank.to_ascii_uppercase()).ok_or(EntryError::UnknownRank(rank))?;
    let suit = Suit::from_letter(suit.to_ascii_uppercase()).ok_or(EntryError::UnknownSuit(suit))?;
    let card = Card::new(rank, suit);
    debug!(%card, "{} of {}", rank.label(), suit.name());
    Ok(card)
}

/// Parses a two-character entry such as `"AS"` or `"th"`.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`EntryError::WrongLength`] if the trimmed entry is not exactly two
/// characters, otherwise the errors of [`validate_and_normalize_entry`].
pub fn parse_entry(entry: &str) -> Result<Card, EntryError> {
    let entry = entry.trim();
    let mut chars = entry.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(rank), Some(suit), None) => validate_and_normalize_entry(rank, suit),
        _ => Err(EntryError::WrongLength(entry.chars().count())),
    }
}
