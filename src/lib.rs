//! A Chkobba card game rule engine with optional `no_std` support.
//!
//! The crate covers the 40-card deck, player hands and the shared
//! [`Table`], which resolves each played card into a capture.
//!
//! # Example
//!
//! ```
//! use chkobba::{DealOptions, Deck, Hand, Selector, Table};
//!
//! let options = DealOptions::default();
//! let mut deck = Deck::new(42);
//! deck.shuffle();
//!
//! let mut hands = [Hand::new(), Hand::new()];
//! let mut table = Table::new();
//! deck.deal_hands(&mut hands, &options).unwrap();
//! deck.deal_table(&mut table, &options).unwrap();
//!
//! let captured = table.play_card(&mut hands[0], Selector::Front).unwrap();
//! assert_eq!(hands[0].pile(), captured.as_slice());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{CARD_VALUES, Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, HandError, InvalidArgumentKind, ParseCardError};
pub use hand::{Hand, Selector};
pub use options::DealOptions;
pub use result::{Play, PlayOutcome};
pub use table::Table;
