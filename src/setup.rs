//! Player seating and game setup.

use alloc::vec::Vec;

use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::Card;
use crate::deal::{Dealer, Hand, OrderedDealer};
use crate::error::DealError;
use crate::options::SetupOptions;
use crate::shuffle::{FisherYates, Shuffler};

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct Player {
    /// Seat number, starting at 1.
    pub id: usize,
    /// Cards dealt to the player.
    pub hand: Hand,
    /// Whether the player moves first.
    pub current_turn: bool,
}

/// Shuffles `cards`, deals the shuffled deck and seats one player per hand.
///
/// The shuffler runs exactly once and the dealer receives exactly what it
/// returned. Player ids follow hand order starting at 1, and only player 1
/// has the turn. Errors from the dealer are returned unchanged.
///
/// # Errors
///
/// Returns [`DealError::InsufficientCards`] if the deck cannot cover
/// `hand_size * number_of_players` cards.
///
/// # Example
///
/// ```
/// use deckrs::{FisherYates, OrderedDealer, setup_game, standard_deck};
///
/// let mut shuffler: FisherYates = FisherYates::seeded(3);
/// let players = setup_game(&standard_deck(), 4, 3, &mut shuffler, &mut OrderedDealer::default())
///     .unwrap();
///
/// assert_eq!(players.iter().map(|p| p.id).collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub fn setup_game<S, D>(
    cards: &[Card],
    hand_size: usize,
    number_of_players: usize,
    shuffler: &mut S,
    dealer: &mut D,
) -> Result<Vec<Player>, DealError>
where
    S: Shuffler + ?Sized,
    D: Dealer + ?Sized,
{
    let shuffled = shuffler.shuffle(cards);
    let hands = dealer.deal(&shuffled, hand_size, number_of_players)?;

    let players: Vec<Player> = hands
        .into_iter()
        .enumerate()
        .map(|(index, hand)| Player {
            id: index + 1,
            hand,
            current_turn: index == 0,
        })
        .collect();

    debug!(players = players.len(), hand_size, "set up game");
    Ok(players)
}

/// A table that sets up games with fixed options and a seeded shuffler.
///
/// # Example
///
/// ```
/// use deckrs::{SetupOptions, Table, standard_deck};
///
/// let deck = standard_deck();
/// let mut first = Table::new(SetupOptions::default(), 9);
/// let mut second = Table::new(SetupOptions::default(), 9);
///
/// assert_eq!(first.setup(&deck).unwrap(), second.setup(&deck).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    options: SetupOptions,
    shuffler: FisherYates<ChaCha8Rng>,
    dealer: OrderedDealer,
}

impl Table {
    /// Creates a new table with the given seed.
    #[must_use]
    pub fn new(options: SetupOptions, seed: u64) -> Self {
        Self {
            options,
            shuffler: FisherYates::seeded(seed),
            dealer: OrderedDealer::new(options.deal_order),
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &SetupOptions {
        &self.options
    }

    /// Replaces the shuffler's generator with one seeded from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.shuffler = FisherYates::seeded(seed);
    }

    /// Shuffles `cards` and deals a new game using the table options.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if `cards` is too short for
    /// the configured hand size and player count.
    pub fn setup(&mut self, cards: &[Card]) -> Result<Vec<Player>, DealError> {
        setup_game(
            cards,
            self.options.hand_size,
            self.options.players,
            &mut self.shuffler,
            &mut self.dealer,
        )
    }
}
