//! WFG hypervolume algorithm.
//!
//! Sums exclusive contributions: for points sorted `p_1..p_n`,
//!
//! ```text
//! HV(P) = sum_i exclusive(p_i, {p_(i+1), ..., p_n})
//! exclusive(p, S) = box(p) - HV(limit(S, p))
//! ```
//!
//! where `limit(S, p)` moves every point of `S` to be no better than `p`
//! in each objective. Limited sets shrink quickly once reduced to their
//! non-dominated subset, which is what makes the recursion fast in
//! practice. Two objectives use a direct sweep.
//!
//! With the `parallel` feature the top-level contributions run on rayon.
//! They are collected in order and summed sequentially, so the result is
//! identical with and without the feature.
//!
//! # References
//!
//! - While, Bradstreet & Barone (2012), "A Fast Way of Calculating Exact
//!   Hypervolumes", IEEE TEVC 16(1)

use super::dominance::non_dominated;
use super::hypervolume::VolumeAlgorithm;

/// Exclusive-contribution strategy. Works for any number of objectives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wfg;

impl VolumeAlgorithm for Wfg {
    fn volume(&self, points: &[Vec<f64>], corner: &[f64]) -> f64 {
        if points.len() < 2 || corner.len() <= 2 {
            return hv(points, corner);
        }
        let sorted = worst_first(points, corner.len());
        contributions(&sorted, corner).iter().sum()
    }
}

#[cfg(feature = "parallel")]
fn contributions(sorted: &[&Vec<f64>], corner: &[f64]) -> Vec<f64> {
    use rayon::prelude::*;

    (0..sorted.len())
        .into_par_iter()
        .map(|i| exclusive(sorted[i], &sorted[i + 1..], corner))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn contributions(sorted: &[&Vec<f64>], corner: &[f64]) -> Vec<f64> {
    (0..sorted.len())
        .map(|i| exclusive(sorted[i], &sorted[i + 1..], corner))
        .collect()
}

/// Sorts descending on the last objective so the later, better points
/// form small limited sets.
fn worst_first(points: &[Vec<f64>], d: usize) -> Vec<&Vec<f64>> {
    let mut sorted: Vec<&Vec<f64>> = points.iter().collect();
    sorted.sort_by(|a, b| b[d - 1].total_cmp(&a[d - 1]));
    sorted
}

/// Hypervolume of a non-dominated set.
fn hv(points: &[Vec<f64>], corner: &[f64]) -> f64 {
    match (points.len(), corner.len()) {
        (0, _) | (_, 0) => 0.0,
        (1, _) => box_volume(&points[0], corner),
        (_, 1) => {
            let best = points.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
            corner[0] - best
        }
        (_, 2) => sweep_2d(points, corner),
        (_, d) => {
            let sorted = worst_first(points, d);
            (0..sorted.len())
                .map(|i| exclusive(sorted[i], &sorted[i + 1..], corner))
                .sum()
        }
    }
}

/// Volume dominated by `p` and by no point of `rest`.
fn exclusive(p: &[f64], rest: &[&Vec<f64>], corner: &[f64]) -> f64 {
    let limited: Vec<Vec<f64>> = rest
        .iter()
        .map(|q| q.iter().zip(p).map(|(&qv, &pv)| qv.max(pv)).collect())
        .collect();
    box_volume(p, corner) - hv(&non_dominated(&limited), corner)
}

fn box_volume(p: &[f64], corner: &[f64]) -> f64 {
    p.iter().zip(corner).map(|(&v, &r)| r - v).product()
}

/// Two-objective staircase area. Input must be non-dominated.
fn sweep_2d(points: &[Vec<f64>], corner: &[f64]) -> f64 {
    let mut sorted: Vec<&Vec<f64>> = points.iter().collect();
    sorted.sort_by(|a, b| a[0].total_cmp(&b[0]));

    let mut area = 0.0;
    for (i, p) in sorted.iter().enumerate() {
        let right = sorted.get(i + 1).map_or(corner[0], |next| next[0]);
        area += (right - p[0]) * (corner[1] - p[1]);
    }
    area
}
