//! Mutation operators for permutation encodings.
//!
//! # Core Traits
//!
//! - [`PermutationSolution`]: Access to a candidate's ordered elements
//! - [`MutationOperator`]: Probabilistic in-place perturbation
//!
//! # Operators
//!
//! - [`InsertMutation`]: Remove one element and reinsert it elsewhere — O(n)
//!
//! Operators draw from a caller-supplied [`RandomSource`](crate::random::RandomSource);
//! none of them keeps a generator of its own.

mod insert;
mod types;

pub use insert::InsertMutation;
pub use types::{MutationOperator, PermutationSolution};
