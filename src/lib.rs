//! Building blocks for population-based multi-objective optimization.
//!
//! Provides two leaf components that evolutionary drivers plug together:
//!
//! - **Insert mutation**: Probabilistic cut-and-paste perturbation of
//!   permutation-encoded candidates. Never changes the element multiset.
//! - **Hypervolume**: Quality indicator scoring a solution set by the volume
//!   it dominates inside a reference boundary, with pluggable exact volume
//!   strategies.
//!
//! # Architecture
//!
//! Neither component depends on the other. Mutation draws from a
//! caller-supplied [`random::RandomSource`]; the indicator reads objective
//! values through [`indicator::Objectives`]. Argument checks live in
//! [`check`] and every failure is a [`MooError`].
//!
//! Selection, crossover, replacement and termination are left to the
//! driver.

pub mod check;
mod error;
pub mod indicator;
pub mod mutation;
pub mod random;

pub use error::{MooError, Result};
