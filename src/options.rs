//! Deck and input configuration options.

/// What [`Deck::deal`](crate::Deck::deal) does when asked for more cards
/// than remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DepletionPolicy {
    /// Deal whatever remains and log a warning.
    #[default]
    Short,
    /// Refuse the deal and leave the deck untouched.
    Strict,
}

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{DeckOptions, DepletionPolicy};
///
/// let options = DeckOptions::default()
///     .with_copies(2)
///     .with_depletion(DepletionPolicy::Strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckOptions {
    /// Number of 52-card sets merged into the deck.
    pub copies: u8,
    /// Behaviour on over-requested deals.
    pub depletion: DepletionPolicy,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            copies: 1,
            depletion: DepletionPolicy::Short,
        }
    }
}

impl DeckOptions {
    /// Sets the number of 52-card sets.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_copies(6);
    /// assert_eq!(options.copies, 6);
    /// ```
    #[must_use]
    pub const fn with_copies(mut self, copies: u8) -> Self {
        self.copies = copies;
        self
    }

    /// Sets the depletion policy.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, DepletionPolicy};
    ///
    /// let options = DeckOptions::default().with_depletion(DepletionPolicy::Strict);
    /// assert_eq!(options.depletion, DepletionPolicy::Strict);
    /// ```
    #[must_use]
    pub const fn with_depletion(mut self, depletion: DepletionPolicy) -> Self {
        self.depletion = depletion;
        self
    }
}

/// How many entries an input loop may request before giving up.
///
/// The default keeps asking until a valid entry arrives or the source closes.
///
/// ```
/// use deckrs::RetryPolicy;
///
/// assert_eq!(RetryPolicy::default().max_attempts, None);
/// assert_eq!(RetryPolicy::limited(3).max_attempts, Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RetryPolicy {
    /// Maximum number of entries requested for one card, `None` for no limit.
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    /// Unbounded retries.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// At most `attempts` entries per card. `limited(0)` fails without
    /// requesting anything.
    #[must_use]
    pub const fn limited(attempts: u32) -> Self {
        Self {
            max_attempts: Some(attempts),
        }
    }

    /// Returns whether `attempts` entries use up the budget.
    #[must_use]
    pub const fn is_exhausted(&self, attempts: u32) -> bool {
        match self.max_attempts {
            Some(max) => attempts >= max,
            None => false,
        }
    }
}
