//! Trait definitions linking mutation operators to solution encodings.

use crate::error::Result;
use crate::random::RandomSource;

/// A permutation-encoded candidate solution.
///
/// Implementors expose their ordered, duplicate-free element sequence.
/// Operators only reorder it; they never add, drop or duplicate elements.
///
/// Implemented for `Vec<T>` so plain vectors can be mutated directly.
///
/// # Implementing
///
/// ```ignore
/// struct Tour {
///     cities: Vec<usize>,
///     length: f64,
/// }
///
/// impl PermutationSolution for Tour {
///     type Element = usize;
///     fn variables(&self) -> &[usize] { &self.cities }
///     fn variables_mut(&mut self) -> &mut Vec<usize> { &mut self.cities }
/// }
/// ```
pub trait PermutationSolution {
    /// Element type of the permutation.
    type Element;

    /// Returns the current ordering.
    fn variables(&self) -> &[Self::Element];

    /// Returns the ordering for in-place editing.
    fn variables_mut(&mut self) -> &mut Vec<Self::Element>;
}

impl<T> PermutationSolution for Vec<T> {
    type Element = T;

    fn variables(&self) -> &[T] {
        self
    }

    fn variables_mut(&mut self) -> &mut Vec<T> {
        self
    }
}

/// A probabilistic operator that perturbs a solution in place.
pub trait MutationOperator<S> {
    /// Probability that a single call actually perturbs the solution.
    fn mutation_probability(&self) -> f64;

    /// Mutates `solution` in place and hands the same instance back.
    ///
    /// # Errors
    ///
    /// [`MooError::NullArgument`](crate::MooError::NullArgument) when
    /// `solution` is `None`.
    fn execute<'a, R: RandomSource>(
        &self,
        solution: Option<&'a mut S>,
        rng: &mut R,
    ) -> Result<&'a mut S>;
}
