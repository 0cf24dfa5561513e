//! Randomness source consumed by the operators.
//!
//! Operators never own a generator. They take `&mut R` where
//! `R: RandomSource`, which every [`rand::Rng`] already satisfies through
//! the blanket implementation below. Tests can plug in a scripted source
//! to force specific draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The two draws the operators need.
pub trait RandomSource {
    /// Uniform real in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in the closed range `[lower, upper]`.
    ///
    /// Callers guarantee `lower <= upper`.
    fn next_int_inclusive(&mut self, lower: usize, upper: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn next_int_inclusive(&mut self, lower: usize, upper: usize) -> usize {
        self.random_range(lower..=upper)
    }
}

/// Creates a seeded generator for reproducible runs.
///
/// ```
/// use u_moo::random::{create_rng, RandomSource};
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.next_int_inclusive(0, 100), b.next_int_inclusive(0, 100));
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
