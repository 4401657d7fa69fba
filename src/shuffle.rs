//! Card shuffling.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::card::Card;

/// Returns a shuffled copy of `cards`, leaving the input untouched.
///
/// This is the modern Fisher-Yates shuffle: walking from the last position
/// down to the second, each position is swapped with one drawn uniformly from
/// itself and everything before it. Every permutation is equally likely.
///
/// # Example
///
/// ```
/// use deckrs::{shuffle_cards, standard_deck};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let deck = standard_deck();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let shuffled = shuffle_cards(&deck, &mut rng);
///
/// assert_eq!(shuffled.len(), deck.len());
/// assert!(deck.iter().all(|card| shuffled.contains(card)));
/// ```
pub fn shuffle_cards<T: Clone, R: Rng + ?Sized>(cards: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = cards.to_vec();

    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }

    trace!(cards = shuffled.len(), "shuffled cards");
    shuffled
}

/// A source of shuffled decks.
pub trait Shuffler {
    /// Returns a reordered copy of `cards` holding exactly the same cards.
    fn shuffle(&mut self, cards: &[Card]) -> Vec<Card>;
}

/// Fisher-Yates shuffler that owns its random number generator.
#[derive(Debug, Clone)]
pub struct FisherYates<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> FisherYates<R> {
    /// Creates a shuffler drawing from `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + SeedableRng> FisherYates<R> {
    /// Creates a shuffler whose generator is seeded from `seed`.
    ///
    /// The same seed always yields the same sequence of shuffles.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(R::seed_from_u64(seed))
    }
}

impl<R: Rng> Shuffler for FisherYates<R> {
    fn shuffle(&mut self, cards: &[Card]) -> Vec<Card> {
        shuffle_cards(cards, &mut self.rng)
    }
}
