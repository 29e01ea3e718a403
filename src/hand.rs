//! Player hands, captured piles and card selection.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;

/// Chooses which card [`Hand::use_card`] removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selector {
    /// The first card in the hand, matching draw order.
    #[default]
    Front,
    /// The card at the given position.
    Index(usize),
    /// The first card equal to the given one.
    Card(Card),
}

impl From<usize> for Selector {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<Card> for Selector {
    fn from(card: Card) -> Self {
        Self::Card(card)
    }
}

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards held, in the order received.
    cards: Vec<Card>,
    /// Cards captured from the table.
    pile: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            pile: Vec::new(),
        }
    }

    /// Creates a hand holding a single card.
    #[must_use]
    pub fn with_card(card: Card) -> Self {
        Self {
            cards: alloc::vec![card],
            pile: Vec::new(),
        }
    }

    /// Adds a card to the end of the hand.
    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds cards to the end of the hand, keeping their order.
    pub fn receive_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Removes and returns the selected card.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::EmptyHand`] if the hand has no cards,
    /// [`HandError::IndexOutOfRange`] for an index past the end, and
    /// [`HandError::CardNotFound`] if the selected card is not held. The hand
    /// is left unchanged on error.
    pub fn use_card(&mut self, selector: Selector) -> Result<Card, HandError> {
        let index = self.position(selector)?;
        Ok(self.cards.remove(index))
    }

    /// Resolves a selector to a position in the hand without removing anything.
    ///
    /// # Errors
    ///
    /// Same as [`Hand::use_card`].
    pub fn position(&self, selector: Selector) -> Result<usize, HandError> {
        let len = self.cards.len();
        if len == 0 {
            return Err(HandError::EmptyHand);
        }

        match selector {
            Selector::Front => Ok(0),
            Selector::Index(index) if index < len => Ok(index),
            Selector::Index(index) => Err(HandError::IndexOutOfRange { index, len }),
            Selector::Card(card) => self
                .cards
                .iter()
                .position(|held| *held == card)
                .ok_or(HandError::CardNotFound(card)),
        }
    }

    /// Adds a captured card to the pile.
    pub fn collect_card(&mut self, card: Card) {
        self.pile.push(card);
    }

    /// Adds captured cards to the pile, keeping their order.
    pub fn collect_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.pile.extend(cards);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards in the hand.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the captured pile.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
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
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
