//! Hypervolume by Slicing Objectives (HSO).
//!
//! Sorts the points on the last objective and cuts the dominated region
//! into slabs between consecutive values. Each slab's cross-section is the
//! hypervolume of the points already swept, projected onto the remaining
//! objectives, which is computed recursively.
//!
//! # Complexity
//!
//! O(n^(m-1)) slabs in the worst case for n points and m objectives.
//!
//! # References
//!
//! - While, Hingston, Barone & Huband (2006), "A Faster Algorithm for
//!   Calculating Hypervolume"

use super::dominance::non_dominated;
use super::hypervolume::VolumeAlgorithm;

/// Slicing strategy. Works for any number of objectives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hso;

impl VolumeAlgorithm for Hso {
    fn volume(&self, points: &[Vec<f64>], corner: &[f64]) -> f64 {
        slice(points, corner)
    }
}

fn slice(points: &[Vec<f64>], corner: &[f64]) -> f64 {
    let d = corner.len();
    if points.is_empty() || d == 0 {
        return 0.0;
    }

    // 1-D: gap from the best point to the corner.
    if d == 1 {
        let best = points.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
        return (corner[0] - best).max(0.0);
    }

    if points.len() == 1 {
        return points[0]
            .iter()
            .zip(corner)
            .map(|(&p, &r)| (r - p).max(0.0))
            .product();
    }

    let mut sorted: Vec<&Vec<f64>> = points.iter().collect();
    sorted.sort_by(|a, b| a[d - 1].total_cmp(&b[d - 1]));

    let sub_corner = &corner[..d - 1];
    let mut result = 0.0;

    for i in 0..sorted.len() {
        let upper = sorted.get(i + 1).map_or(corner[d - 1], |next| next[d - 1]);
        let height = upper - sorted[i][d - 1];
        if height <= 0.0 {
            continue;
        }

        let projected: Vec<Vec<f64>> = sorted[..=i].iter().map(|p| p[..d - 1].to_vec()).collect();
        let slab = non_dominated(&projected);
        result += height * slice(&slab, sub_corner);
    }

    result
}
