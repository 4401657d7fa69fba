//! Error types for deck and dealing operations.

use thiserror::Error;

/// Errors that can occur while building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Suits or values are not a list of string tokens.
    #[error("suits and values must be arrays of strings")]
    InvalidArgumentType,
    /// Suits or values have the wrong number of entries.
    #[error("expected 4 suits and 13 values, got {suits} suits and {values} values")]
    InvalidArgumentShape {
        /// Number of suits supplied.
        suits: usize,
        /// Number of values supplied.
        values: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deal needs more cards than were supplied.
    #[error("not enough cards: need {needed}, have {available}")]
    InsufficientCards {
        /// Cards required by the deal, saturated at `usize::MAX`.
        needed: usize,
        /// Cards supplied.
        available: usize,
    },
}
