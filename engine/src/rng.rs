//! The single randomness funnel for all games.
//!
//! Every draw a game makes goes through [`GameRng`] so that a round can be
//! reproduced exactly from a seed. The backing stream is ChaCha8; entropy
//! seeding is only used at the presentation boundary.

use parlor_types::Deck;
use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable random source shared by all game engines.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// An rng seeded from the host's entropy source.
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_rng(rand::thread_rng())
                .unwrap_or_else(|_| ChaCha8Rng::seed_from_u64(0)),
        }
    }

    /// A deterministic rng for reproducible rounds.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A freshly shuffled 52-card deck.
    pub fn create_deck(&mut self) -> Deck {
        let mut deck = Deck::standard();
        deck.shuffle(&mut self.inner);
        deck
    }

    /// One fair six-sided die (1..=6).
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// A uniform draw from `range`.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.inner.gen_range(range)
    }

    /// True with probability `p`.
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.inner.gen_bool(p)
    }

    /// A uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}
