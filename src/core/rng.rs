//! Injectable random source for bot move draws.
//!
//! Every random decision the engine makes goes through a `GameRng`, so a
//! caller that seeds it gets a reproducible game:
//!
//! ```
//! use rps_plus::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.choose_weighted(&[1.0, 1.0, 1.0]), b.choose_weighted(&[1.0, 1.0, 1.0]));
//! ```
//!
//! A session registry holds one root RNG and forks a fresh stream per
//! session, so sessions never share a sequence.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic ChaCha8 RNG with forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Fork an independent stream.
    ///
    /// Forks are deterministic: the n-th fork of a given seed always has
    /// the same seed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Single weighted draw. Returns the index of the chosen weight.
    ///
    /// Weights do not need to sum to 1.0. Zero-weight entries are never
    /// chosen. Returns `None` if weights are empty or all zero.
    pub fn choose_weighted(&mut self, weights: &[f32]) -> Option<usize> {
        let total: f32 = weights.iter().sum();
        if weights.is_empty() || total <= 0.0 {
            return None;
        }

        let mut threshold = self.inner.gen::<f32>() * total;

        for (i, &weight) in weights.iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }
            threshold -= weight;
            if threshold < 0.0 {
                return Some(i);
            }
        }

        // Rounding left a sliver of threshold; fall back to the last live entry.
        weights.iter().rposition(|&w| w > 0.0)
    }

    /// Capture the stream position for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        let weights = [0.3, 0.3, 0.3, 0.1];

        for _ in 0..100 {
            assert_eq!(rng1.choose_weighted(&weights), rng2.choose_weighted(&weights));
        }
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(rng1.fork().state(), rng2.fork().state());
        assert_ne!(rng1.fork().state().seed, rng1.fork().state().seed);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();
        let weights = [1.0; 16];

        let seq1: Vec<_> = (0..10).map(|_| rng.choose_weighted(&weights)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.choose_weighted(&weights)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_choose_weighted_skips_zero_weights() {
        let mut rng = GameRng::new(42);

        for _ in 0..200 {
            assert_eq!(rng.choose_weighted(&[0.0, 5.0, 0.0]), Some(1));
        }

        assert_eq!(rng.choose_weighted(&[]), None);
        assert_eq!(rng.choose_weighted(&[0.0, 0.0]), None);
    }

    #[test]
    fn test_choose_weighted_covers_all_live_entries() {
        let mut rng = GameRng::new(9);
        let mut seen = [0usize; 4];

        for _ in 0..2000 {
            seen[rng.choose_weighted(&[0.3, 0.3, 0.3, 0.1]).unwrap()] += 1;
        }

        assert!(seen.iter().all(|&n| n > 0));
        // Bomb slot is the rare one.
        assert!(seen[3] < seen[0] && seen[3] < seen[1] && seen[3] < seen[2]);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        let weights = [1.0; 4];
        for _ in 0..100 {
            rng.choose_weighted(&weights);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.choose_weighted(&weights)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.choose_weighted(&weights)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
