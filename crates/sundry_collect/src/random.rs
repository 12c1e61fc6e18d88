//! Random permutation and sampling.
//!
//! The random source is always supplied by the caller. Use
//! [`shuffle_seeded`] when a reproducible order is needed, e.g. in tests.
//!
//! These are the only helpers that mutate their input: the `&mut [T]`
//! argument is permuted in place, so the caller holds exclusive access for
//! the duration of the call.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Permutes `seq` uniformly at random in place.
pub fn shuffle<T, R: Rng + ?Sized>(seq: &mut [T], rng: &mut R) {
    seq.shuffle(rng);
}

/// Permutes `seq` in place using a generator seeded from `seed`.
///
/// The same seed always yields the same permutation.
pub fn shuffle_seeded<T>(seq: &mut [T], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    shuffle(seq, &mut rng);
}

/// Shuffles `seq` in place and returns up to `k` of its elements.
///
/// Returns the whole sequence when `k` exceeds its length.
pub fn random<T: Clone, R: Rng + ?Sized>(seq: &mut [T], k: usize, rng: &mut R) -> Vec<T> {
    shuffle(seq, rng);
    seq.iter().take(k).cloned().collect()
}
