//! The shared table and play resolution.

extern crate alloc;

use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::error::HandError;
use crate::hand::{Hand, Selector};
use crate::result::{Play, PlayOutcome};

mod capture;

/// The face-up cards both players capture from.
///
/// The table owns the capture rules. A played card takes a single table
/// card of equal value if one exists. Otherwise it takes the largest
/// combination of table cards whose values add up to its own value. If
/// neither exists, the card is laid on the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Cards on the table, in the order they were laid.
    cards: Vec<Card>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Lays a card at the end of the table.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Lays cards at the end of the table, keeping their order.
    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Plays the selected card from `hand` and returns the captured cards.
    ///
    /// Captured cards are also added to the hand's pile. The result is empty
    /// when nothing could be captured and the card was laid on the table.
    ///
    /// # Example
    ///
    /// ```
    /// use chkobba::{Card, Hand, Rank, Selector, Suit, Table};
    ///
    /// let mut table = Table::new();
    /// table.add_cards([Card::new(Rank::Two, Suit::Hearts), Card::new(Rank::Three, Suit::Clubs)]);
    ///
    /// let mut hand = Hand::with_card(Card::new(Rank::Five, Suit::Spades));
    /// let captured = table.play_card(&mut hand, Selector::Front).unwrap();
    ///
    /// assert_eq!(captured.len(), 3);
    /// assert!(table.is_empty());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`HandError`] if the selector does not resolve to a card in
    /// the hand. Neither the hand nor the table is changed in that case.
    pub fn play_card(&mut self, hand: &mut Hand, selector: Selector) -> Result<Vec<Card>, HandError> {
        self.play(hand, selector).map(|play| play.captured)
    }

    /// Plays the selected card from `hand` and returns the full [`Play`].
    ///
    /// # Errors
    ///
    /// Same as [`Table::play_card`].
    pub fn play(&mut self, hand: &mut Hand, selector: Selector) -> Result<Play, HandError> {
        let played = hand.use_card(selector)?;
        let play = self.resolve(played);
        hand.collect_cards(play.captured.iter().copied());
        Ok(play)
    }

    /// Resolves a card that has already left its hand.
    ///
    /// Taken table cards are removed and returned in [`Play::captured`]; the
    /// caller is responsible for adding them to a pile.
    pub fn resolve(&mut self, played: Card) -> Play {
        let Some((outcome, taken)) = self.find_capture(played.value()) else {
            self.cards.push(played);
            debug!(%played, table = self.cards.len(), "Placed card on table");
            return Play {
                outcome: PlayOutcome::Placed,
                played,
                captured: Vec::new(),
                sweep: false,
            };
        };

        let mut captured = Vec::with_capacity(taken.len() + 1);
        captured.push(played);
        captured.extend(taken.iter().map(|&index| self.cards[index]));
        self.remove_indices(&taken);

        let sweep = self.cards.is_empty();
        debug!(
            %played,
            ?outcome,
            taken = taken.len(),
            sweep,
            "Captured from table"
        );

        Play {
            outcome,
            played,
            captured,
            sweep,
        }
    }

    /// Removes the cards at `indices`, which must be sorted ascending.
    fn remove_indices(&mut self, indices: &[usize]) {
        let mut position = 0;
        self.cards.retain(|_| {
            let keep = indices.binary_search(&position).is_err();
            position += 1;
            keep
        });
    }

    /// Returns the sum of the values of the cards on the table.
    #[must_use]
    pub fn total_value(&self) -> u32 {
        self.cards.iter().map(|card| u32::from(card.value())).sum()
    }

    /// Returns the cards on the table.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards on the table.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
