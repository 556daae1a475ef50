//! Seeded random number generation.
//!
//! All stochastic steps (selection, crossover points, mutation, restarts)
//! draw from a generator created here, so a fixed seed reproduces a run.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The generator type used by every engine.
pub type EngineRng = ChaCha8Rng;

/// Creates a deterministic generator from `seed`.
///
/// ```
/// use rand::Rng;
/// use u_climb::random::create_rng;
///
/// let a: u64 = create_rng(7).random();
/// let b: u64 = create_rng(7).random();
/// assert_eq!(a, b);
/// ```
pub fn create_rng(seed: u64) -> EngineRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, falling back to entropy.
pub fn rng_from_seed(seed: Option<u64>) -> EngineRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
