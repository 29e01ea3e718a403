extern crate alloc;

use alloc::vec::Vec;

use tracing::trace;

use crate::result::PlayOutcome;

use super::Table;

/// Walks the `size`-element index combinations of `0..len` in
/// lexicographic order.
struct Combinations {
    len: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    fn new(len: usize, size: usize) -> Self {
        Self {
            len,
            indices: (0..size).collect(),
            started: false,
            done: size == 0 || size > len,
        }
    }

    /// Moves to the next combination and returns it.
    fn advance(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }

        let size = self.indices.len();
        let offset = self.len - size;

        // Rightmost slot that can still move up.
        let Some(slot) = (0..size).rev().find(|&i| self.indices[i] != i + offset) else {
            self.done = true;
            return None;
        };

        self.indices[slot] += 1;
        for i in slot + 1..size {
            self.indices[i] = self.indices[i - 1] + 1;
        }

        Some(&self.indices)
    }
}

impl Table {
    /// Lists every set of table cards whose values add up to `value`.
    ///
    /// Each entry holds ascending table indices. Entries are ordered by size
    /// and then lexicographically, so a single-card entry is a direct match.
    #[must_use]
    pub fn capture_options(&self, value: u8) -> Vec<Vec<usize>> {
        let mut options = Vec::new();

        for size in 1..=self.max_subset_size(value) {
            let mut combinations = Combinations::new(self.cards.len(), size);
            while let Some(indices) = combinations.advance() {
                if self.sum_of(indices) == u32::from(value) {
                    options.push(indices.to_vec());
                }
            }
        }

        options
    }

    /// Returns the table indices a card of `value` would capture, or `None`
    /// if it would be laid on the table.
    ///
    /// A direct match always wins and the first one in table order is taken.
    /// Otherwise the largest combination is taken, and among combinations of
    /// equal size the first in [`Table::capture_options`] order.
    #[must_use]
    pub fn best_capture(&self, value: u8) -> Option<Vec<usize>> {
        self.find_capture(value).map(|(_, indices)| indices)
    }

    pub(super) fn find_capture(&self, value: u8) -> Option<(PlayOutcome, Vec<usize>)> {
        if let Some(index) = self.cards.iter().position(|card| card.value() == value) {
            return Some((PlayOutcome::Direct, alloc::vec![index]));
        }

        self.largest_combination(value)
            .map(|indices| (PlayOutcome::Combination, indices))
    }

    /// Searches from the largest possible size down and stops at the first hit.
    fn largest_combination(&self, value: u8) -> Option<Vec<usize>> {
        if self.total_value() < u32::from(value) {
            return None;
        }

        let max_size = self.max_subset_size(value);
        trace!(table = self.cards.len(), value, max_size, "Searching combinations");

        for size in (2..=max_size).rev() {
            let mut combinations = Combinations::new(self.cards.len(), size);
            while let Some(indices) = combinations.advance() {
                if self.sum_of(indices) == u32::from(value) {
                    trace!(size, "Found combination");
                    return Some(indices.to_vec());
                }
            }
        }

        None
    }

    /// Every card is worth at least 1, so no more than `value` cards can sum to it.
    fn max_subset_size(&self, value: u8) -> usize {
        self.cards.len().min(usize::from(value))
    }

    fn sum_of(&self, indices: &[usize]) -> u32 {
        indices
            .iter()
            .map(|&index| u32::from(self.cards[index].value()))
            .sum()
    }
}
