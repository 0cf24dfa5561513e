//! Pareto dominance helpers.
//!
//! All objectives are **minimized**: lower values are better.

/// Dominance comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Identical vectors.
    Equal,
    /// Neither dominates the other.
    Neither,
}

/// Compares two objective vectors for Pareto dominance.
///
/// Only the common prefix is compared; callers check lengths first.
pub fn dominance_cmp(a: &[f64], b: &[f64]) -> Dominance {
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        (false, false) => Dominance::Equal,
        (true, true) => Dominance::Neither,
    }
}

/// Returns `true` if `a` is no worse than `b` everywhere and strictly
/// better somewhere.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    dominance_cmp(a, b) == Dominance::Left
}

/// Returns `true` if `a` is no worse than `b` in every objective.
pub fn weakly_dominates(a: &[f64], b: &[f64]) -> bool {
    matches!(dominance_cmp(a, b), Dominance::Left | Dominance::Equal)
}

/// Returns the non-dominated, duplicate-free subset of `points`.
///
/// A point is dropped when another point dominates it, or when an
/// identical point appears earlier. Survivors keep their input order.
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of points
///
/// ```
/// use u_moo::indicator::dominance::non_dominated;
///
/// let points = vec![
///     vec![1.0, 3.0],
///     vec![2.0, 2.0],
///     vec![1.0, 3.0], // duplicate
///     vec![2.5, 2.5], // dominated by (2, 2)
/// ];
/// assert_eq!(non_dominated(&points), vec![vec![1.0, 3.0], vec![2.0, 2.0]]);
/// ```
pub fn non_dominated(points: &[Vec<f64>]) -> Vec<Vec<f64>> {
    points
        .iter()
        .enumerate()
        .filter(|&(i, p)| {
            !points.iter().enumerate().any(|(j, q)| match dominance_cmp(q, p) {
                Dominance::Left => true,
                Dominance::Equal => j < i,
                _ => false,
            })
        })
        .map(|(_, p)| p.clone())
        .collect()
}
