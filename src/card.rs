//! Card identifiers and the standard suit and value sets.

use alloc::string::String;
use core::fmt;

/// Number of suits in a deck.
pub const SUIT_COUNT: usize = 4;

/// Number of values per suit.
pub const VALUE_COUNT: usize = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = SUIT_COUNT * VALUE_COUNT;

/// Standard suit symbols, in deck order.
pub const STANDARD_SUITS: [&str; SUIT_COUNT] = ["♠", "♥", "♦", "♣"];

/// Standard value symbols, in deck order.
pub const STANDARD_VALUES: [&str; VALUE_COUNT] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// A playing card.
///
/// A card is nothing more than its suit symbol followed by its value symbol,
/// so `♠` and `A` make `♠A`. Two cards built from the same symbols are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct Card(String);

impl Card {
    /// Creates a card from a suit symbol and a value symbol.
    ///
    /// ```
    /// use deckrs::Card;
    ///
    /// assert_eq!(Card::new("♠", "A").as_str(), "♠A");
    /// ```
    #[must_use]
    pub fn new(suit: &str, value: &str) -> Self {
        let mut id = String::with_capacity(suit.len() + value.len());
        id.push_str(suit);
        id.push_str(value);
        Self(id)
    }

    /// Returns the card identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Card {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Card {
    fn from(id: &str) -> Self {
        Self(String::from(id))
    }
}

impl PartialEq<str> for Card {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Card {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
