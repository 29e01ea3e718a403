//! Deal configuration options.

/// Configuration for dealing hands and the opening table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use chkobba::DealOptions;
///
/// let options = DealOptions::default()
///     .with_hand_size(3)
///     .with_table_cards(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealOptions {
    /// Number of cards dealt to each hand.
    pub hand_size: usize,
    /// Number of cards laid face-up on the table at the start of a round.
    pub table_cards: usize,
}

impl Default for DealOptions {
    fn default() -> Self {
        Self {
            hand_size: 3,
            table_cards: 4,
        }
    }
}

impl DealOptions {
    /// Sets the number of cards dealt to each hand.
    ///
    /// # Example
    ///
    /// ```
    /// use chkobba::DealOptions;
    ///
    /// let options = DealOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the number of opening table cards.
    ///
    /// # Example
    ///
    /// ```
    /// use chkobba::DealOptions;
    ///
    /// let options = DealOptions::default().with_table_cards(0);
    /// assert_eq!(options.table_cards, 0);
    /// ```
    #[must_use]
    pub const fn with_table_cards(mut self, table_cards: usize) -> Self {
        self.table_cards = table_cards;
        self
    }

    /// Returns the number of cards needed to deal `players` hands.
    #[must_use]
    pub const fn cards_for_hands(&self, players: usize) -> usize {
        self.hand_size.saturating_mul(players)
    }
}
