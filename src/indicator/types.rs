//! Core trait definitions for quality indicators.

use super::reference::ReferenceFront;
use crate::error::Result;

/// Read access to a solution's objective vector.
///
/// The indicator only needs the ordered objective values; how a solution
/// stores anything else is irrelevant to it.
///
/// Built-in implementations exist for `Vec<f64>`, `[f64]`, `[f64; N]`
/// and references to any implementor.
pub trait Objectives {
    /// Returns the objective values, one per objective.
    fn objectives(&self) -> &[f64];
}

impl Objectives for Vec<f64> {
    fn objectives(&self) -> &[f64] {
        self
    }
}

impl Objectives for [f64] {
    fn objectives(&self) -> &[f64] {
        self
    }
}

impl<const N: usize> Objectives for [f64; N] {
    fn objectives(&self) -> &[f64] {
        self
    }
}

impl<T: Objectives + ?Sized> Objectives for &T {
    fn objectives(&self) -> &[f64] {
        (**self).objectives()
    }
}

/// A scalar quality measure for a set of objective vectors.
///
/// Generic comparison code uses [`name`](Self::name) to label results and
/// [`is_the_lower_the_indicator_value_the_better`](Self::is_the_lower_the_indicator_value_the_better)
/// to orient them, so no per-indicator direction needs hardcoding.
pub trait QualityIndicator {
    /// Short identifier used when reporting results.
    fn name(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Whether smaller values indicate a better set.
    fn is_the_lower_the_indicator_value_the_better(&self) -> bool;

    /// The reference boundary, if one has been supplied.
    fn reference_front(&self) -> Option<&ReferenceFront>;

    /// Computes the indicator over raw objective vectors.
    ///
    /// Must not modify `front` and must be deterministic.
    fn compute(&self, front: &[Vec<f64>]) -> Result<f64>;

    /// Computes the indicator over any solutions exposing [`Objectives`].
    fn evaluate<S: Objectives>(&self, solutions: &[S]) -> Result<f64>
    where
        Self: Sized,
    {
        let front: Vec<Vec<f64>> = solutions
            .iter()
            .map(|s| s.objectives().to_vec())
            .collect();
        self.compute(&front)
    }
}
