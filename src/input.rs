//! Card entry from an external source.
//!
//! Operations that need a card named by a person or another system (discarding,
//! playing, recording an observed deal) take a [`CardInput`] and a
//! [`RetryPolicy`]. Invalid or unusable entries are reported back to the
//! source and a fresh entry is requested, one card at a time.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use tracing::{trace, warn};

use crate::card::Card;
use crate::codec::parse_entry;
use crate::error::{EntryError, InputError};
use crate::options::RetryPolicy;

/// A source of two-character card entries (`"AS"`, `"TH"`, ...).
pub trait CardInput {
    /// Requests the next entry. `None` means the source is closed.
    fn request_entry(&mut self) -> Option<String>;

    /// Called when an entry is rejected, before the next request.
    fn rejected(&mut self, _entry: &str, _reason: &EntryError) {}

    /// Called when an entry is accepted.
    fn accepted(&mut self, _card: Card) {}
}

impl<T: CardInput + ?Sized> CardInput for &mut T {
    fn request_entry(&mut self) -> Option<String> {
        (**self).request_entry()
    }

    fn rejected(&mut self, entry: &str, reason: &EntryError) {
        (**self).rejected(entry, reason);
    }

    fn accepted(&mut self, card: Card) {
        (**self).accepted(card);
    }
}

/// A queue of prepared entries.
///
/// Useful for tests and for replaying entries received from elsewhere.
/// Rejections and accepted cards are recorded for inspection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    entries: VecDeque<String>,
    rejections: Vec<(String, EntryError)>,
    accepted: Vec<Card>,
}

impl ScriptedInput {
    /// Creates an input that yields `entries` in order, then closes.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            entries: entries.into_iter().map(|e| e.to_string()).collect(),
            rejections: Vec::new(),
            accepted: Vec::new(),
        }
    }

    /// Appends an entry to the queue.
    pub fn push(&mut self, entry: impl ToString) {
        self.entries.push_back(entry.to_string());
    }

    /// Number of entries not yet requested.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.entries.len()
    }

    /// Rejected entries with their reasons, oldest first.
    #[must_use]
    pub fn rejections(&self) -> &[(String, EntryError)] {
        &self.rejections
    }

    /// Accepted cards, oldest first.
    #[must_use]
    pub fn accepted_cards(&self) -> &[Card] {
        &self.accepted
    }
}

impl CardInput for ScriptedInput {
    fn request_entry(&mut self) -> Option<String> {
        self.entries.pop_front()
    }

    fn rejected(&mut self, entry: &str, reason: &EntryError) {
        self.rejections.push((entry.to_string(), *reason));
    }

    fn accepted(&mut self, card: Card) {
        self.accepted.push(card);
    }
}

/// Requests entries until one parses and passes `accept`.
///
/// Each rejected entry is logged, reported to the input, and counts against
/// the retry policy. The budget is checked before every request, so
/// `RetryPolicy::limited(0)` never asks. Only the current card is retried.
///
/// # Errors
///
/// Returns [`InputError::Closed`] if the input runs out of entries and
/// [`InputError::TooManyAttempts`] if the retry budget is used up.
pub fn acquire<I, T, F>(input: &mut I, retry: RetryPolicy, mut accept: F) -> Result<T, InputError>
where
    I: CardInput + ?Sized,
    F: FnMut(Card) -> Result<T, EntryError>,
{
    let mut attempts: u32 = 0;
    loop {
        if retry.is_exhausted(attempts) {
            return Err(InputError::TooManyAttempts(attempts));
        }
        let entry = input.request_entry().ok_or(InputError::Closed)?;
        attempts = attempts.saturating_add(1);

        match parse_entry(&entry).and_then(|card| accept(card).map(|value| (card, value))) {
            Ok((card, value)) => {
                trace!(%card, attempts, "entry accepted");
                input.accepted(card);
                return Ok(value);
            }
            Err(reason) => {
                warn!(entry = entry.as_str(), %reason, attempts, "entry rejected");
                input.rejected(&entry, &reason);
            }
        }
    }
}

/// Requests entries until a well-formed card arrives.
///
/// # Errors
///
/// See [`acquire`].
pub fn request_card<I>(input: &mut I, retry: RetryPolicy) -> Result<Card, InputError>
where
    I: CardInput + ?Sized,
{
    acquire(input, retry, Ok)
}
