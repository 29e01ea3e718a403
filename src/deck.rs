//! The 40-card deck, shuffling, drawing and dealing.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::hand::Hand;
use crate::options::DealOptions;
use crate::table::Table;

/// A deck of cards with its own random number generator.
///
/// A new deck is in canonical order; call [`Deck::shuffle`] before dealing.
/// Cards are always drawn from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, front first.
    cards: Vec<Card>,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, unshuffled deck whose shuffles are driven by `seed`.
    ///
    /// Two decks built from the same seed shuffle into the same order.
    ///
    /// # Example
    ///
    /// ```
    /// use chkobba::Deck;
    ///
    /// let mut deck = Deck::new(42);
    /// deck.shuffle();
    /// assert_eq!(deck.len(), 40);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a full, unshuffled deck seeded from the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            cards: Self::create_full_deck(),
            rng,
        }
    }

    /// Builds the 40 cards in canonical order: by rank, then by suit.
    #[must_use]
    pub fn create_full_deck() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        debug!(remaining = self.cards.len(), "Shuffled deck");
    }

    /// Removes and returns the first `count` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if fewer than `count` cards
    /// remain. The deck is left unchanged on error.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        self.ensure_remaining(count)?;

        let drawn: Vec<Card> = self.cards.drain(..count).collect();
        debug!(count, remaining = self.cards.len(), "Drew cards");
        Ok(drawn)
    }

    /// Removes and returns the first card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if the deck is empty.
    pub fn draw_one(&mut self) -> Result<Card, DeckError> {
        self.ensure_remaining(1)?;
        Ok(self.cards.remove(0))
    }

    /// Deals `hand_size` cards to every hand, one card per hand per pass.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if the deck cannot fill every
    /// hand. No cards are dealt in that case.
    pub fn deal_hands(&mut self, hands: &mut [Hand], options: &DealOptions) -> Result<(), DeckError> {
        self.ensure_remaining(options.cards_for_hands(hands.len()))?;

        for _ in 0..options.hand_size {
            for hand in hands.iter_mut() {
                hand.receive_card(self.cards.remove(0));
            }
        }

        debug!(
            players = hands.len(),
            hand_size = options.hand_size,
            remaining = self.cards.len(),
            "Dealt hands"
        );
        Ok(())
    }

    /// Lays the opening cards on the table.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if the deck cannot cover the
    /// configured table cards. The table is left unchanged in that case.
    pub fn deal_table(&mut self, table: &mut Table, options: &DealOptions) -> Result<(), DeckError> {
        let cards = self.draw(options.table_cards)?;
        table.add_cards(cards);
        Ok(())
    }

    fn ensure_remaining(&self, requested: usize) -> Result<(), DeckError> {
        let remaining = self.cards.len();
        if requested > remaining {
            return Err(DeckError::InsufficientCards {
                requested,
                remaining,
            });
        }
        Ok(())
    }

    /// Returns the remaining cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
