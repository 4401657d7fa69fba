//! Table configuration options.

use crate::deal::DealOrder;

/// Configuration options for a [`Table`](crate::Table).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{DealOrder, SetupOptions};
///
/// let options = SetupOptions::default()
///     .with_hand_size(7)
///     .with_players(2)
///     .with_deal_order(DealOrder::RoundRobin);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SetupOptions {
    /// Cards dealt to each player.
    pub hand_size: usize,
    /// Number of seated players.
    pub players: usize,
    /// Order in which cards are handed out.
    pub deal_order: DealOrder,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            hand_size: 5,
            players: 4,
            deal_order: DealOrder::Block,
        }
    }
}

impl SetupOptions {
    /// Sets the number of cards per hand.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::SetupOptions;
    ///
    /// let options = SetupOptions::default().with_hand_size(13);
    /// assert_eq!(options.hand_size, 13);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::SetupOptions;
    ///
    /// let options = SetupOptions::default().with_players(6);
    /// assert_eq!(options.players, 6);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the deal order.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DealOrder, SetupOptions};
    ///
    /// let options = SetupOptions::default().with_deal_order(DealOrder::RoundRobin);
    /// assert_eq!(options.deal_order, DealOrder::RoundRobin);
    /// ```
    #[must_use]
    pub const fn with_deal_order(mut self, order: DealOrder) -> Self {
        self.deal_order = order;
        self
    }

    /// Returns the number of cards a setup with these options deals.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub const fn cards_needed(&self) -> Option<usize> {
        self.hand_size.checked_mul(self.players)
    }
}
