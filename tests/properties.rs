//! Property tests for deck handling and capture resolution.

use std::collections::HashSet;

use chkobba::{Card, DECK_SIZE, DealOptions, Deck, Hand, PlayOutcome, Rank, Selector, Suit, Table};
use proptest::prelude::*;

fn table_of(values: &[u8]) -> Table {
    let mut table = Table::new();
    for (i, &value) in values.iter().enumerate() {
        let rank = Rank::ALL[usize::from(value) - 1];
        table.add_card(Card::new(rank, Suit::ALL[i % Suit::ALL.len()]));
    }
    table
}

fn all_cards(deck: &Deck, hands: &[Hand], table: &Table) -> Vec<Card> {
    let mut cards: Vec<Card> = deck.cards().to_vec();
    for hand in hands {
        cards.extend(hand.cards());
        cards.extend(hand.pile());
    }
    cards.extend(table.cards());
    cards
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every seed shuffles the same 40 distinct cards.
    #[test]
    fn prop_shuffled_deck_is_complete(seed in any::<u64>()) {
        let mut deck = Deck::new(seed);
        deck.shuffle();

        let unique: HashSet<(Rank, Suit)> = deck.cards().iter().map(|c| (c.rank, c.suit)).collect();
        prop_assert_eq!(unique.len(), DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                prop_assert!(unique.contains(&(rank, suit)));
            }
        }
    }

    /// The same seed always yields the same order.
    #[test]
    fn prop_shuffle_is_deterministic(seed in any::<u64>()) {
        let mut first = Deck::new(seed);
        let mut second = Deck::new(seed);
        first.shuffle();
        second.shuffle();
        prop_assert_eq!(first.cards(), second.cards());
    }

    /// Drawing shrinks the deck by exactly the drawn cards.
    #[test]
    fn prop_draw_removes_cards(seed in any::<u64>(), count in 0usize..=DECK_SIZE) {
        let mut deck = Deck::new(seed);
        deck.shuffle();
        let before = deck.len();

        let drawn = deck.draw(count).unwrap();
        prop_assert_eq!(drawn.len(), count);
        prop_assert_eq!(deck.len(), before - count);
        prop_assert!(drawn.iter().all(|c| !deck.cards().contains(c)));
        prop_assert!(deck.draw(deck.len() + 1).is_err());
        prop_assert_eq!(deck.len(), before - count);
    }

    /// Cards are never lost or duplicated across deck, hands, piles and table.
    #[test]
    fn prop_plays_conserve_cards(
        seed in any::<u64>(),
        picks in proptest::collection::vec(any::<usize>(), 0..12),
    ) {
        let options = DealOptions::default();
        let mut deck = Deck::new(seed);
        deck.shuffle();
        let mut hands = [Hand::new(), Hand::new()];
        let mut table = Table::new();
        deck.deal_hands(&mut hands, &options).unwrap();
        deck.deal_table(&mut table, &options).unwrap();

        for (turn, pick) in picks.into_iter().enumerate() {
            let hand = &mut hands[turn % 2];
            if hand.is_empty() && deck.deal_hands(core::slice::from_mut(hand), &options).is_err() {
                break;
            }

            let table_before = table.len();
            let selector = Selector::Index(pick % hand.len());
            let play = table.play(hand, selector).unwrap();
            match play.outcome {
                PlayOutcome::Placed => prop_assert_eq!(table.len(), table_before + 1),
                _ => prop_assert_eq!(table.len() + play.captured.len() - 1, table_before),
            }
            prop_assert_eq!(play.sweep, play.is_capture() && table.is_empty());

            let cards = all_cards(&deck, &hands, &table);
            let unique: HashSet<Card> = cards.iter().copied().collect();
            prop_assert_eq!(cards.len(), DECK_SIZE);
            prop_assert_eq!(unique.len(), DECK_SIZE);
        }
    }

    /// The chosen capture follows the direct-match, then largest-combination order.
    #[test]
    fn prop_best_capture_matches_enumeration(
        values in proptest::collection::vec(1u8..=10, 0..9),
        played in 1u8..=10,
    ) {
        let table = table_of(&values);
        let options = table.capture_options(played);
        let best = table.best_capture(played);

        if let Some(direct) = values.iter().position(|&v| v == played) {
            prop_assert_eq!(best, Some(vec![direct]));
        } else {
            let largest = options.iter().map(Vec::len).max();
            let expected = largest.and_then(|len| options.iter().find(|o| o.len() == len).cloned());
            prop_assert_eq!(best, expected);
        }

        for option in &options {
            let sum: u32 = option.iter().map(|&i| u32::from(values[i])).sum();
            prop_assert_eq!(sum, u32::from(played));
        }
    }

    /// Table value is the sum of its cards' mapped values.
    #[test]
    fn prop_total_value_is_sum(values in proptest::collection::vec(1u8..=10, 0..12)) {
        let table = table_of(&values);
        let expected: u32 = values.iter().map(|&v| u32::from(v)).sum();
        prop_assert_eq!(table.total_value(), expected);
        prop_assert_eq!(table.total_value(), expected);
    }
}
