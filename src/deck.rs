//! Deck construction.
//!
//! Decks are built suit-major: every value of the first suit, then every
//! value of the second suit and so on.

use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::{Card, STANDARD_SUITS, STANDARD_VALUES, SUIT_COUNT, VALUE_COUNT};
use crate::error::DeckError;

fn build<S: AsRef<str>, V: AsRef<str>>(suits: &[S], values: &[V]) -> Vec<Card> {
    let mut cards = Vec::with_capacity(suits.len() * values.len());

    for suit in suits {
        for value in values {
            cards.push(Card::new(suit.as_ref(), value.as_ref()));
        }
    }

    debug!(cards = cards.len(), "built deck");
    cards
}

/// Creates a deck from exactly four suits and thirteen values.
///
/// The array lengths are checked by the compiler, so this cannot fail.
///
/// # Example
///
/// ```
/// use deckrs::{STANDARD_SUITS, STANDARD_VALUES, create_cards};
///
/// let deck = create_cards(&STANDARD_SUITS, &STANDARD_VALUES);
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0], "♠A");
/// assert_eq!(deck[13], "♥A");
/// ```
#[must_use]
pub fn create_cards<S: AsRef<str>, V: AsRef<str>>(
    suits: &[S; SUIT_COUNT],
    values: &[V; VALUE_COUNT],
) -> Vec<Card> {
    build(suits, values)
}

/// Creates a deck from slices whose lengths are only known at runtime.
///
/// # Errors
///
/// Returns [`DeckError::InvalidArgumentShape`] unless there are exactly four
/// suits and thirteen values.
pub fn try_create_cards<S: AsRef<str>, V: AsRef<str>>(
    suits: &[S],
    values: &[V],
) -> Result<Vec<Card>, DeckError> {
    if suits.len() != SUIT_COUNT || values.len() != VALUE_COUNT {
        warn!(
            suits = suits.len(),
            values = values.len(),
            "rejected deck shape"
        );
        return Err(DeckError::InvalidArgumentShape {
            suits: suits.len(),
            values: values.len(),
        });
    }

    Ok(build(suits, values))
}

/// Creates a deck from untyped JSON input.
///
/// Every element of both arrays must be a JSON string; numbers and other
/// values are not converted to symbols.
///
/// # Errors
///
/// Returns [`DeckError::InvalidArgumentType`] if either argument is not an
/// array of strings, and [`DeckError::InvalidArgumentShape`] if the arrays
/// have the wrong length.
///
/// # Example
///
/// ```
/// use deckrs::{DeckError, create_cards_from_json};
/// use serde_json::json;
///
/// let err = create_cards_from_json(&json!("not an array"), &json!([])).unwrap_err();
/// assert_eq!(err, DeckError::InvalidArgumentType);
/// ```
#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
pub fn create_cards_from_json(
    suits: &serde_json::Value,
    values: &serde_json::Value,
) -> Result<Vec<Card>, DeckError> {
    let (Some(suits), Some(values)) = (string_tokens(suits), string_tokens(values)) else {
        warn!("rejected non-array deck input");
        return Err(DeckError::InvalidArgumentType);
    };

    try_create_cards(&suits, &values)
}

#[cfg(feature = "json")]
fn string_tokens(value: &serde_json::Value) -> Option<Vec<&str>> {
    value
        .as_array()?
        .iter()
        .map(serde_json::Value::as_str)
        .collect()
}

/// Creates the standard 52-card deck.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    create_cards(&STANDARD_SUITS, &STANDARD_VALUES)
}
