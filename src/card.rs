//! Card types, the rank value table, and textual card notation.

use core::fmt;
use core::str::FromStr;

use crate::error::{InvalidArgumentKind, ParseCardError};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the one-letter suit label (`S`, `H`, `C` or `D`).
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
        }
    }

    const fn from_label(label: char) -> Option<Self> {
        match label.to_ascii_uppercase() {
            'S' => Some(Self::Spades),
            'H' => Some(Self::Hearts),
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Card rank.
///
/// The 40-card deck has no 8, 9 or 10. The court cards take those values
/// instead, in the order Queen, Jack, King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace, worth 1.
    One,
    /// Worth 2.
    Two,
    /// Worth 3.
    Three,
    /// Worth 4.
    Four,
    /// Worth 5.
    Five,
    /// Worth 6.
    Six,
    /// Worth 7.
    Seven,
    /// Queen, worth 8.
    Queen,
    /// Jack, worth 9.
    Jack,
    /// King, worth 10.
    King,
}

impl Rank {
    /// All ranks in deck construction order.
    pub const ALL: [Self; 10] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Queen,
        Self::Jack,
        Self::King,
    ];

    /// Returns the capture value of the rank (1 through 10).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Queen => 8,
            Self::Jack => 9,
            Self::King => 10,
        }
    }

    /// Returns the one-character rank label (`1`-`7`, `Q`, `J` or `K`).
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::King => 'K',
        }
    }

    const fn from_label(label: char) -> Option<Self> {
        match label.to_ascii_uppercase() {
            '1' | 'A' => Some(Self::One),
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'K' => Some(Self::King),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rank to capture value mapping.
pub const CARD_VALUES: [(Rank, u8); 10] = [
    (Rank::One, Rank::One.value()),
    (Rank::Two, Rank::Two.value()),
    (Rank::Three, Rank::Three.value()),
    (Rank::Four, Rank::Four.value()),
    (Rank::Five, Rank::Five.value()),
    (Rank::Six, Rank::Six.value()),
    (Rank::Seven, Rank::Seven.value()),
    (Rank::Queen, Rank::Queen.value()),
    (Rank::Jack, Rank::Jack.value()),
    (Rank::King, Rank::King.value()),
];

/// A playing card.
///
/// Two cards are equal when both rank and suit match. The capture value is
/// derived from the rank.
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

    /// Returns the capture value of the card.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses the two-character notation used by [`Card`]'s `Display`, such as
/// `"QH"` or `"7d"`. Case is ignored and `A` is accepted for the ace.
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::InvalidArgument(InvalidArgumentKind::Length));
        };

        let rank = Rank::from_label(rank)
            .ok_or(ParseCardError::InvalidArgument(InvalidArgumentKind::Rank))?;
        let suit = Suit::from_label(suit)
            .ok_or(ParseCardError::InvalidArgument(InvalidArgumentKind::Suit))?;

        Ok(Self::new(rank, suit))
    }
}

/// Number of cards in a deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();
