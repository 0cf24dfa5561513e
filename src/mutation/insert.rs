//! Insert mutation for permutation encodings.
//!
//! Cuts one element out of the permutation and pastes it at another
//! position. Compared with a swap, only the relative order of the moved
//! element changes, which suits sequencing problems where adjacency
//! matters (scheduling, routing).
//!
//! # References
//!
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use tracing::trace;

use super::types::{MutationOperator, PermutationSolution};
use crate::check;
use crate::error::Result;
use crate::random::RandomSource;

/// Insert mutation operator.
///
/// Holds only its mutation probability, validated to lie in `[0, 1]`.
/// The value is immutable; use
/// [`with_mutation_probability`](Self::with_mutation_probability) to get a
/// reconfigured operator.
///
/// # Examples
///
/// ```
/// use u_moo::mutation::{InsertMutation, MutationOperator};
/// use u_moo::random::create_rng;
///
/// let op = InsertMutation::new(1.0).unwrap();
/// let mut rng = create_rng(42);
/// let mut perm = vec![0, 1, 2, 3, 4];
///
/// op.execute(Some(&mut perm), &mut rng).unwrap();
///
/// let mut sorted = perm.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "InsertMutationParams")
)]
pub struct InsertMutation {
    mutation_probability: f64,
}

impl InsertMutation {
    /// Creates an operator with the given mutation probability.
    ///
    /// # Errors
    ///
    /// [`MooError::Validation`](crate::MooError::Validation) when the
    /// probability is outside `[0, 1]` or NaN.
    pub fn new(mutation_probability: f64) -> Result<Self> {
        Ok(Self {
            mutation_probability: check::probability_is_valid(mutation_probability)?,
        })
    }

    /// Returns the configured mutation probability.
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// Returns a copy of this operator with a new mutation probability.
    ///
    /// Validated exactly like [`new`](Self::new).
    pub fn with_mutation_probability(self, mutation_probability: f64) -> Result<Self> {
        Self::new(mutation_probability)
    }

    /// Applies the mutation without the presence check.
    ///
    /// # Algorithm
    ///
    /// 1. Permutations of length 0 or 1 are left alone (no draws).
    /// 2. One real draw decides whether to mutate at all.
    /// 3. Two positions are drawn from `[0, n-1]`; only the second is
    ///    redrawn while they coincide.
    /// 4. The element at `pos1` is removed and reinserted at `pos2 - 1`
    ///    when `pos1 < pos2` (removal shifted the tail left), else at
    ///    `pos2`.
    ///
    /// The redraw loop has no cap. It terminates as long as the generator
    /// eventually yields a different integer, which any non-degenerate
    /// source does for `n > 1`.
    ///
    /// # Complexity
    /// O(n) due to element shifting
    pub fn do_mutation<S, R>(&self, solution: &mut S, rng: &mut R)
    where
        S: PermutationSolution + ?Sized,
        R: RandomSource + ?Sized,
    {
        let variables = solution.variables_mut();
        let n = variables.len();
        if n <= 1 {
            return;
        }
        if rng.next_f64() >= self.mutation_probability {
            return;
        }

        let pos1 = rng.next_int_inclusive(0, n - 1);
        let mut pos2 = rng.next_int_inclusive(0, n - 1);
        while pos1 == pos2 {
            pos2 = rng.next_int_inclusive(0, n - 1);
        }

        let value = variables.remove(pos1);
        let target = if pos1 < pos2 { pos2 - 1 } else { pos2 };
        variables.insert(target, value);

        trace!(from = pos1, to = target, len = n, "insert mutation relocated element");
    }
}

impl<S: PermutationSolution> MutationOperator<S> for InsertMutation {
    fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    fn execute<'a, R: RandomSource>(
        &self,
        solution: Option<&'a mut S>,
        rng: &mut R,
    ) -> Result<&'a mut S> {
        let solution = check::not_null(solution, "solution")?;
        self.do_mutation(&mut *solution, rng);
        Ok(solution)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct InsertMutationParams {
    mutation_probability: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<InsertMutationParams> for InsertMutation {
    type Error = crate::MooError;

    fn try_from(params: InsertMutationParams) -> Result<Self> {
        Self::new(params.mutation_probability)
    }
}

// ============================================================================
// Tests
// ============================================================================
