//! Deterministic random number generation for dice and policies.
//!
//! ## Key Features
//!
//! - **Deterministic**: the same seed produces the identical dice sequence,
//!   so whole games replay exactly
//! - **Serializable**: O(1) state capture and restore for checkpointing a
//!   game mid-session
//!
//! ## Usage
//!
//! ```
//! use rust_ludo::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll_die();
//! assert!((1..=6).contains(&roll));
//!
//! // same seed, same sequence
//! let mut replay = GameRng::new(42);
//! assert_eq!(replay.roll_die(), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG owning all randomness in a game: dice rolls and any
/// random policy choices.
///
/// Uses ChaCha8 for speed while keeping cryptographic-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Roll a standard die: uniform 1..=6.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Choose a random element from a slice.
    ///
    /// Returns `None` on an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of how
/// many rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
