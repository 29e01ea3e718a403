//! Error types for deck, hand and parsing operations.

use core::fmt;

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when drawing or dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Not enough cards remain in the deck.
    #[error("not enough cards in the deck: requested {requested}, remaining {remaining}")]
    InsufficientCards {
        /// Number of cards the operation needed.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when taking a card from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand holds no cards.
    #[error("no cards in hand")]
    EmptyHand,
    /// The selected index is past the end of the hand.
    #[error("index {index} out of range for hand of {len} cards")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// The selected card is not in the hand.
    #[error("card {0} not in hand")]
    CardNotFound(Card),
}

/// Which part of a card argument was malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgumentKind {
    /// Input was not exactly one rank and one suit character.
    Length,
    /// Unknown rank label.
    Rank,
    /// Unknown suit label.
    Suit,
}

impl fmt::Display for InvalidArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Length => "expected a rank and a suit",
            Self::Rank => "unknown rank",
            Self::Suit => "unknown suit",
        })
    }
}

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The argument does not describe a card.
    #[error("invalid card argument: {0}")]
    InvalidArgument(InvalidArgumentKind),
}
