//! Card deck building, shuffling and dealing with optional `no_std` support.
//!
//! The crate is split into four small steps that compose linearly:
//! [`create_cards`] builds a deck, [`shuffle_cards`] permutes it,
//! [`deal_cards`] splits a prefix of it into hands and [`setup_game`] runs the
//! last two in order and seats the players. [`Table`] bundles the whole flow
//! behind a seeded random number generator and [`SetupOptions`].
//!
//! # Example
//!
//! ```
//! use deckrs::{SetupOptions, Table, standard_deck};
//!
//! let deck = standard_deck();
//! let mut table = Table::new(SetupOptions::default().with_hand_size(4).with_players(3), 42);
//! let players = table.setup(&deck).unwrap();
//!
//! assert_eq!(players.len(), 3);
//! assert!(players[0].current_turn);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deal;
pub mod deck;
pub mod error;
pub mod options;
pub mod setup;
pub mod shuffle;

// Re-export main types
pub use card::{Card, DECK_SIZE, STANDARD_SUITS, STANDARD_VALUES, SUIT_COUNT, VALUE_COUNT};
pub use deal::{DealOrder, Dealer, Hand, OrderedDealer, deal_cards, deal_cards_in_order};
#[cfg(feature = "json")]
pub use deck::create_cards_from_json;
pub use deck::{create_cards, standard_deck, try_create_cards};
pub use error::{DealError, DeckError};
pub use options::SetupOptions;
pub use setup::{Player, Table, setup_game};
pub use shuffle::{FisherYates, Shuffler, shuffle_cards};
