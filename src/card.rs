//! Card types, valuation modes and the 3-character token encoding.

use core::fmt;
use core::str::FromStr;

use crate::error::{ParseCardError, UnknownAceMode};

/// Card rank.
///
/// Discriminants follow the face value with the ace low (Ace = 1, King = 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks, ace low.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the single-character symbol used in tokens (`T` for ten).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// Returns the human-readable label. Identical to the symbol except
    /// that ten reads `"10"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Parses a token symbol. Only upper-case symbols are accepted.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Ace),
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            _ => None,
        }
    }

    /// Numeric value of the rank under the given ace mode.
    #[must_use]
    pub const fn value(self, mode: AceMode) -> u8 {
        match (self, mode) {
            (Self::Ace, AceMode::Low | AceMode::NumericLow) => 1,
            (Self::Ace, AceMode::High) => 11,
            (Self::Ace, AceMode::NumericHigh) => 14,
            (Self::Jack | Self::Queen | Self::King, AceMode::Low | AceMode::High) => 10,
            (rank, _) => rank as u8,
        }
    }

    /// Sort key: `A,2..K` when `ace_high` is false, `2..K,A` otherwise.
    #[must_use]
    pub const fn order(self, ace_high: bool) -> u8 {
        match self {
            Self::Ace if ace_high => 14,
            rank => rank as u8,
        }
    }
}

/// Card color, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Spades and clubs.
    Black,
    /// Hearts and diamonds.
    Red,
}

impl Color {
    /// Returns the token letter (`B` or `R`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Black => 'B',
            Self::Red => 'R',
        }
    }

    /// Returns the color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Red => "Red",
        }
    }

    /// Parses a token letter.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'B' => Some(Self::Black),
            'R' => Some(Self::Red),
            _ => None,
        }
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];

    /// Returns the token letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Hearts => 'H',
        }
    }

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
        }
    }

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Spades | Self::Clubs => Color::Black,
            Self::Diamonds | Self::Hearts => Color::Red,
        }
    }

    /// Parses a token letter. Only upper-case letters are accepted.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'S' => Some(Self::Spades),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            'H' => Some(Self::Hearts),
            _ => None,
        }
    }
}

/// A playing card.
///
/// The text form is a 3-character token: rank symbol, suit letter and color
/// letter, e.g. `ASB` for the ace of spades or `THR` for the ten of hearts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the color of the card.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Numeric value under the given ace mode.
    #[must_use]
    pub const fn value(self, mode: AceMode) -> u8 {
        self.rank.value(mode)
    }

    /// Returns the 3-character token.
    #[must_use]
    pub const fn token(self) -> [char; 3] {
        [self.rank.symbol(), self.suit.letter(), self.color().letter()]
    }

    /// Parses a 3-character token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token does not have exactly three characters,
    /// if any character is outside its alphabet, or if the color letter does
    /// not match the suit.
    pub fn from_token(token: &str) -> Result<Self, ParseCardError> {
        let mut chars = token.chars();
        let (Some(r), Some(s), Some(c), None) =
            (chars.next(), chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseCardError::WrongLength(token.chars().count()));
        };

        let rank = Rank::from_symbol(r).ok_or(ParseCardError::UnknownRank(r))?;
        let suit = Suit::from_letter(s).ok_or(ParseCardError::UnknownSuit(s))?;
        let color = Color::from_letter(c).ok_or(ParseCardError::UnknownColor(c))?;
        if suit.color() != color {
            return Err(ParseCardError::ColorMismatch { suit, color });
        }

        Ok(Self::new(rank, suit))
    }

    /// Label used in hand listings, e.g. `"10 Hearts"`.
    #[must_use]
    pub fn name(self) -> alloc::string::String {
        alloc::format!("{} {}", self.rank.label(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, s, c] = self.token();
        write!(f, "{r}{s}{c}")
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

/// Removes the first occurrence of `card` from `cards`.
pub(crate) fn take_first(cards: &mut alloc::vec::Vec<Card>, card: Card) -> Option<Card> {
    let index = cards.iter().position(|&c| c == card)?;
    Some(cards.remove(index))
}

/// Ace and face-card valuation convention.
///
/// | mode | A | J/Q/K |
/// |---|---|---|
/// | `Low` | 1 | 10 |
/// | `High` | 11 | 10 |
/// | `NumericLow` | 1 | 11/12/13 |
/// | `NumericHigh` | 14 | 11/12/13 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AceMode {
    /// Ace counts 1, faces 10.
    #[default]
    Low,
    /// Ace counts 11, faces 10.
    High,
    /// Ace counts 1, faces 11/12/13.
    NumericLow,
    /// Ace counts 14, faces 11/12/13.
    NumericHigh,
}

impl AceMode {
    /// Maps the two-flag convention (`ace_high`, `face_numeric`) onto a mode.
    ///
    /// ```
    /// use deckrs::AceMode;
    ///
    /// assert_eq!(AceMode::from_flags(true, true), AceMode::NumericHigh);
    /// assert_eq!(AceMode::from_flags(false, false), AceMode::Low);
    /// ```
    #[must_use]
    pub const fn from_flags(ace_high: bool, face_numeric: bool) -> Self {
        match (ace_high, face_numeric) {
            (false, false) => Self::Low,
            (true, false) => Self::High,
            (false, true) => Self::NumericLow,
            (true, true) => Self::NumericHigh,
        }
    }

    /// Returns the mode name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
            Self::NumericLow => "numeric-low",
            Self::NumericHigh => "numeric-high",
        }
    }
}

impl FromStr for AceMode {
    type Err = UnknownAceMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "high" => Ok(Self::High),
            "numeric-low" => Ok(Self::NumericLow),
            "numeric-high" => Ok(Self::NumericHigh),
            _ => Err(UnknownAceMode),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
