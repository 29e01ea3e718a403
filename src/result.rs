//! Play result types for capture resolution.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// How a played card was resolved against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayOutcome {
    /// A single table card of equal value was captured.
    Direct,
    /// A combination of table cards summing to the played value was captured.
    Combination,
    /// Nothing could be captured and the card was laid on the table.
    Placed,
}

/// Result of resolving one played card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    /// How the play was resolved.
    pub outcome: PlayOutcome,
    /// The card that was played.
    pub played: Card,
    /// Captured cards, played card first and then the taken table cards in
    /// table order. Empty when the card was placed.
    pub captured: Vec<Card>,
    /// Whether the capture cleared the table.
    pub sweep: bool,
}

impl Play {
    /// Returns whether anything was captured.
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        !matches!(self.outcome, PlayOutcome::Placed)
    }

    /// Returns the total capture value of the taken table cards.
    #[must_use]
    pub fn taken_value(&self) -> u32 {
        self.captured
            .iter()
            .skip(1)
            .map(|card| u32::from(card.value()))
            .sum()
    }
}
