//! Hand representation and dealing.

use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::Card;
use crate::error::DealError;

/// The order in which cards leave the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DealOrder {
    /// Each hand is filled completely before the next one starts.
    ///
    /// With hands of four, the first hand gets cards 0 to 3, the second
    /// cards 4 to 7 and so on.
    #[default]
    Block,
    /// One card to each hand in turn, as dealt at a real table.
    RoundRobin,
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct Hand {
    /// Cards in the hand, in dealing order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
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

    /// Consumes the hand, returning its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Deals `number_of_players` hands of `hand_size` cards in block order.
///
/// Cards are taken from the front of `cards`; whatever is left past the
/// dealt prefix is ignored. The input is never modified.
///
/// # Errors
///
/// Returns [`DealError::InsufficientCards`] if `hand_size * number_of_players`
/// exceeds the number of cards. Nothing is dealt in that case.
///
/// # Example
///
/// ```
/// use deckrs::{deal_cards, standard_deck};
///
/// let deck = standard_deck();
/// let hands = deal_cards(&deck, 4, 3).unwrap();
///
/// assert_eq!(hands.len(), 3);
/// assert_eq!(hands[1].cards(), &deck[4..8]);
/// ```
pub fn deal_cards(
    cards: &[Card],
    hand_size: usize,
    number_of_players: usize,
) -> Result<Vec<Hand>, DealError> {
    deal_cards_in_order(cards, hand_size, number_of_players, DealOrder::Block)
}

/// Deals hands like [`deal_cards`], using the given [`DealOrder`].
///
/// # Errors
///
/// Returns [`DealError::InsufficientCards`] if `hand_size * number_of_players`
/// exceeds the number of cards.
pub fn deal_cards_in_order(
    cards: &[Card],
    hand_size: usize,
    number_of_players: usize,
    order: DealOrder,
) -> Result<Vec<Hand>, DealError> {
    let needed = hand_size.checked_mul(number_of_players);
    let Some(needed) = needed.filter(|&needed| needed <= cards.len()) else {
        let err = DealError::InsufficientCards {
            needed: needed.unwrap_or(usize::MAX),
            available: cards.len(),
        };
        warn!(hand_size, number_of_players, available = cards.len(), "{err}");
        return Err(err);
    };

    let hands: Vec<Hand> = match order {
        DealOrder::Block => (0..number_of_players)
            .map(|seat| {
                let start = seat * hand_size;
                Hand::new(cards[start..start + hand_size].to_vec())
            })
            .collect(),
        DealOrder::RoundRobin => (0..number_of_players)
            .map(|seat| {
                Hand::new(
                    (0..hand_size)
                        .map(|round| cards[round * number_of_players + seat].clone())
                        .collect(),
                )
            })
            .collect(),
    };

    debug!(
        hands = hands.len(),
        hand_size,
        remaining = cards.len() - needed,
        ?order,
        "dealt cards"
    );
    Ok(hands)
}

/// Splits a deck into hands.
pub trait Dealer {
    /// Deals `number_of_players` hands of `hand_size` cards from `cards`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] when `cards` is too short.
    fn deal(
        &mut self,
        cards: &[Card],
        hand_size: usize,
        number_of_players: usize,
    ) -> Result<Vec<Hand>, DealError>;
}

/// Dealer that uses a fixed [`DealOrder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderedDealer {
    order: DealOrder,
}

impl OrderedDealer {
    /// Creates a dealer using `order`.
    #[must_use]
    pub const fn new(order: DealOrder) -> Self {
        Self { order }
    }

    /// Returns the deal order.
    #[must_use]
    pub const fn order(&self) -> DealOrder {
        self.order
    }
}

impl Dealer for OrderedDealer {
    fn deal(
        &mut self,
        cards: &[Card],
        hand_size: usize,
        number_of_players: usize,
    ) -> Result<Vec<Hand>, DealError> {
        deal_cards_in_order(cards, hand_size, number_of_players, self.order)
    }
}
