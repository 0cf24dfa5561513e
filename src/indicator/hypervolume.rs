//! Hypervolume quality indicator.
//!
//! The hypervolume of a set is the measure of the region that is dominated
//! by at least one of its points and bounded by the reference corner. A
//! larger value means a better set.
//!
//! [`Hypervolume`] owns the reference front and cleans the input; the
//! volume itself is delegated to a [`VolumeAlgorithm`] strategy.
//!
//! # Input cleaning
//!
//! Before a strategy is invoked:
//!
//! 1. every vector must match the reference dimensionality;
//! 2. points not strictly better than the corner in every objective are
//!    dropped, since they bound no volume;
//! 3. the rest is reduced to its non-dominated subset, with exact
//!    duplicates collapsed to their first occurrence.
//!
//! Dominated points and duplicates therefore contribute exactly zero.
//!
//! # References
//!
//! - Zitzler & Thiele (1998), "Multiobjective Optimization Using
//!   Evolutionary Algorithms: A Comparative Case Study"

use tracing::debug;

use super::dominance::non_dominated;
use super::reference::ReferenceFront;
use super::types::QualityIndicator;
use super::wfg::Wfg;
use crate::check;
use crate::error::{MooError, Result};

/// A strategy computing the exact dominated volume.
///
/// Implementations receive a cleaned point set: non-empty, non-dominated,
/// duplicate-free, every point strictly inside the corner box and of the
/// corner's dimensionality. All objectives are minimized.
///
/// Any implementation must be deterministic and monotone: adding a
/// non-dominated point never decreases the result.
pub trait VolumeAlgorithm {
    /// Volume dominated by `points` and bounded by `corner`.
    fn volume(&self, points: &[Vec<f64>], corner: &[f64]) -> f64;
}

/// Hypervolume indicator over a fixed reference front.
///
/// The volume strategy defaults to [`Wfg`]; swap it with
/// [`with_algorithm`](Self::with_algorithm).
///
/// # Examples
///
/// ```
/// use u_moo::indicator::{Hypervolume, QualityIndicator};
///
/// let hv = Hypervolume::from_reference_point(&[1.0, 1.0]).unwrap();
///
/// let one = hv.evaluate(&[vec![0.5, 0.5]]).unwrap();
/// let two = hv.evaluate(&[vec![0.5, 0.5], vec![0.2, 0.8]]).unwrap();
///
/// assert!((one - 0.25).abs() < 1e-12);
/// assert!(two > one);
/// assert!(!hv.is_the_lower_the_indicator_value_the_better());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hypervolume<V = Wfg> {
    reference: Option<ReferenceFront>,
    algorithm: V,
}

impl Hypervolume<Wfg> {
    /// Creates an indicator with no reference front.
    ///
    /// Evaluation fails with [`MooError::Validation`] until one is
    /// supplied through [`with_reference_front`](Self::with_reference_front).
    pub fn new() -> Self {
        Self {
            reference: None,
            algorithm: Wfg,
        }
    }

    /// Creates an indicator over an explicit reference front.
    pub fn from_front(points: Vec<Vec<f64>>) -> Result<Self> {
        Ok(Self::new().with_reference_front(ReferenceFront::from_points(points)?))
    }

    /// Creates an indicator over the front derived from a single
    /// reference point.
    pub fn from_reference_point(point: &[f64]) -> Result<Self> {
        Ok(Self::new().with_reference_front(ReferenceFront::from_reference_point(point)?))
    }
}

impl<V> Hypervolume<V> {
    /// Sets the reference front.
    pub fn with_reference_front(mut self, front: ReferenceFront) -> Self {
        self.reference = Some(front);
        self
    }

    /// Replaces the volume strategy.
    pub fn with_algorithm<W: VolumeAlgorithm>(self, algorithm: W) -> Hypervolume<W> {
        Hypervolume {
            reference: self.reference,
            algorithm,
        }
    }

    /// The volume strategy in use.
    pub fn algorithm(&self) -> &V {
        &self.algorithm
    }
}

impl<V: VolumeAlgorithm> QualityIndicator for Hypervolume<V> {
    fn name(&self) -> &'static str {
        "HV"
    }

    fn description(&self) -> &'static str {
        "Hypervolume quality indicator"
    }

    fn is_the_lower_the_indicator_value_the_better(&self) -> bool {
        false
    }

    fn reference_front(&self) -> Option<&ReferenceFront> {
        self.reference.as_ref()
    }

    fn compute(&self, front: &[Vec<f64>]) -> Result<f64> {
        let reference = self.reference.as_ref().ok_or_else(|| {
            MooError::Validation("hypervolume reference front is not set".into())
        })?;

        let dimension = reference.dimension();
        for point in front {
            check::dimension_matches(dimension, point.len())?;
            if point.iter().any(|v| !v.is_finite()) {
                return Err(MooError::Validation(format!(
                    "objective vector has non-finite coordinates: {point:?}"
                )));
            }
        }

        let corner = reference.corner();
        let inside: Vec<Vec<f64>> = front
            .iter()
            .filter(|p| p.iter().zip(corner).all(|(&v, &r)| v < r))
            .cloned()
            .collect();
        let retained = non_dominated(&inside);

        let value = if retained.is_empty() {
            0.0
        } else {
            self.algorithm.volume(&retained, corner)
        };

        debug!(
            points = front.len(),
            retained = retained.len(),
            value,
            "hypervolume evaluated"
        );
        Ok(value)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::Hso;
    use proptest::prelude::*;

    fn unit_square() -> Hypervolume {
        Hypervolume::from_reference_point(&[1.0, 1.0]).unwrap()
    }

    // ---- Contract ----

    #[test]
    fn test_name_and_direction() {
        let hv = unit_square();
        assert_eq!(hv.name(), "HV");
        assert!(!hv.is_the_lower_the_indicator_value_the_better());
        assert_eq!(hv.description(), "Hypervolume quality indicator");

        let hso = Hypervolume::new().with_algorithm(Hso);
        assert_eq!(hso.name(), "HV");
        assert!(!hso.is_the_lower_the_indicator_value_the_better());
    }

    #[test]
    fn test_reference_point_derives_front() {
        let hv = Hypervolume::from_reference_point(&[2.0, 3.0]).unwrap();
        let front = hv.reference_front().unwrap();
        assert_eq!(front.points(), &[vec![2.0, 0.0], vec![0.0, 3.0]]);
    }

    #[test]
    fn test_missing_reference_front() {
        let hv = Hypervolume::new();
        assert!(hv.reference_front().is_none());
        assert!(matches!(
            hv.evaluate(&[vec![0.5, 0.5]]),
            Err(MooError::Validation(_))
        ));
    }

    #[test]
    fn test_reference_front_supplied_later() {
        let front = ReferenceFront::from_reference_point(&[1.0, 1.0]).unwrap();
        let hv = Hypervolume::new().with_reference_front(front);
        let value = hv.evaluate(&[vec![0.5, 0.5]]).unwrap();
        assert!((value - 0.25).abs() < 1e-12);
    }

    // ---- Monotonicity ----

    #[test]
    fn test_non_dominated_addition_increases() {
        let hv = unit_square();
        let base = hv.evaluate(&[vec![0.5, 0.5]]).unwrap();
        let grown = hv.evaluate(&[vec![0.5, 0.5], vec![0.2, 0.8]]).unwrap();

        assert!((base - 0.25).abs() < 1e-12);
        // Extra strip: (0.5 - 0.2) * (1.0 - 0.8)
        assert!((grown - 0.31).abs() < 1e-12);
        assert!(grown > base);
    }

    #[test]
    fn test_dominated_addition_unchanged() {
        let hv = unit_square();
        let base = hv.evaluate(&[vec![0.5, 0.5]]).unwrap();
        let same = hv.evaluate(&[vec![0.5, 0.5], vec![0.6, 0.6]]).unwrap();
        assert_eq!(base, same);
    }

    // ---- Reference consistency ----

    #[test]
    fn test_points_outside_reference_contribute_nothing() {
        let hv = unit_square();
        assert_eq!(hv.evaluate(&[vec![1.0, 1.0]]).unwrap(), 0.0);
        assert_eq!(hv.evaluate(&[vec![1.5, 0.1]]).unwrap(), 0.0);
        assert_eq!(hv.evaluate(&[vec![0.5, 1.0]]).unwrap(), 0.0);

        let base = hv.evaluate(&[vec![0.5, 0.5]]).unwrap();
        let with_outside = hv
            .evaluate(&[vec![0.5, 0.5], vec![1.2, 0.0], vec![0.0, 1.0]])
            .unwrap();
        assert_eq!(base, with_outside);
    }

    #[test]
    fn test_empty_set_is_zero() {
        let hv = unit_square();
        let empty: Vec<Vec<f64>> = Vec::new();
        assert_eq!(hv.evaluate(&empty).unwrap(), 0.0);
    }

    // ---- Duplicates ----

    #[test]
    fn test_duplicates_not_double_counted() {
        let hv = unit_square();
        let once = hv.evaluate(&[vec![0.5, 0.5], vec![0.2, 0.8]]).unwrap();
        let repeated = hv
            .evaluate(&[
                vec![0.5, 0.5],
                vec![0.2, 0.8],
                vec![0.5, 0.5],
                vec![0.2, 0.8],
                vec![0.5, 0.5],
            ])
            .unwrap();
        assert_eq!(once, repeated);
    }

    // ---- Dimensionality ----

    #[test]
    fn test_dimension_mismatch() {
        let hv = unit_square();
        assert_eq!(
            hv.evaluate(&[vec![0.1, 0.2, 0.3]]),
            Err(MooError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
        assert!(matches!(
            hv.evaluate(&[vec![0.5, 0.5], vec![0.1]]),
            Err(MooError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let hv = unit_square();
        assert!(matches!(
            hv.evaluate(&[vec![f64::NAN, 0.5]]),
            Err(MooError::Validation(_))
        ));
    }

    // ---- Explicit front ----

    #[test]
    fn test_explicit_front_uses_nadir_corner() {
        let hv = Hypervolume::from_front(vec![vec![0.0, 4.0], vec![2.0, 2.0], vec![4.0, 0.0]])
            .unwrap();
        let value = hv
            .evaluate(&[vec![1.0, 3.0], vec![2.0, 2.0], vec![3.0, 1.0]])
            .unwrap();
        assert!((value - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_accepts_arrays_and_references() {
        let hv = unit_square();
        let arrays = [[0.5, 0.5], [0.2, 0.8]];
        let refs: Vec<&[f64; 2]> = arrays.iter().collect();
        let a = hv.evaluate(&arrays).unwrap();
        let b = hv.evaluate(&refs).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_input_not_modified() {
        let hv = unit_square();
        let input = vec![vec![0.6, 0.6], vec![0.5, 0.5], vec![0.5, 0.5]];
        let copy = input.clone();
        hv.evaluate(&input).unwrap();
        assert_eq!(input, copy);
    }

    // ---- Strategy agreement ----

    #[test]
    fn test_strategies_agree_three_objectives() {
        let points = vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 3.0, 1.0],
            vec![3.0, 1.0, 2.0],
        ];
        let wfg = Hypervolume::from_reference_point(&[4.0, 4.0, 4.0]).unwrap();
        let hso = wfg.clone().with_algorithm(Hso);

        // Inclusion-exclusion: 3 * 6 - 3 * 2 + 1
        assert!((wfg.evaluate(&points).unwrap() - 13.0).abs() < 1e-9);
        assert!((hso.evaluate(&points).unwrap() - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_shared_across_threads() {
        let hv = std::sync::Arc::new(unit_square());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let hv = std::sync::Arc::clone(&hv);
                std::thread::spawn(move || hv.evaluate(&[vec![0.5, 0.5]]).unwrap())
            })
            .collect();
        for h in handles {
            assert!((h.join().unwrap() - 0.25).abs() < 1e-12);
        }
    }

    // ---- Properties ----

    fn point_set(d: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
        prop::collection::vec(prop::collection::vec(0.0f64..1.2, d), 0..12)
    }

    proptest! {
        #[test]
        fn prop_strategies_agree(
            (d, points) in (1usize..5).prop_flat_map(|d| point_set(d).prop_map(move |p| (d, p))),
        ) {
            let corner = vec![1.0; d];
            let wfg = Hypervolume::from_reference_point(&corner).unwrap();
            let hso = wfg.clone().with_algorithm(Hso);

            let a = wfg.evaluate(&points).unwrap();
            let b = hso.evaluate(&points).unwrap();
            prop_assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0), "wfg {} vs hso {}", a, b);
            prop_assert!(a >= 0.0);
            prop_assert!(a <= 1.0 + 1e-12);
        }

        #[test]
        fn prop_adding_a_point_never_decreases(
            points in point_set(3),
            extra in prop::collection::vec(0.0f64..1.2, 3),
        ) {
            let hv = Hypervolume::from_reference_point(&[1.0, 1.0, 1.0]).unwrap();
            let before = hv.evaluate(&points).unwrap();
            let mut grown = points.clone();
            grown.push(extra);
            let after = hv.evaluate(&grown).unwrap();
            prop_assert!(after >= before - 1e-12);
        }
    }
}
