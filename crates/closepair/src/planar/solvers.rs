//! Closest-pair solvers: brute force, strip merge, recursive driver.
//!
//! The entry point is [`find_closest_pair`]. It sorts a copy of the input by
//! x once; the recursion then only ever borrows contiguous sub-slices of that
//! one backing vector, so no halves are copied. Strips are fresh per-level
//! collections because they are re-sorted by y.
//!
//! Tie-break policy (deterministic for a fixed input order, but unspecified
//! for callers): brute force keeps the earliest pair found in (i, j) scan
//! order; the combination step keeps the right half's result on exact ties.

use nalgebra::Vector2;

use super::types::{ClosestPair, InsufficientInput};
use super::util::{cmp_x, cmp_y, distance};

/// Exhaustive pairwise scan. Correct for any `n >= 2`; intended for small `n`
/// and as the correctness baseline for the recursive solver.
///
/// Pre: `points.len() >= 2` (the recursive driver guarantees this; other
/// callers must too).
pub fn brute_force(points: &[Vector2<f64>]) -> ClosestPair {
    debug_assert!(points.len() >= 2, "brute_force needs at least 2 points");
    let mut best = ClosestPair::new(distance(points[0], points[1]), (points[0], points[1]));
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = distance(points[i], points[j]);
            // strict <: earliest pair wins on exact ties
            if d < best.dist {
                best = ClosestPair::new(d, (points[i], points[j]));
            }
        }
    }
    best
}

/// Scan a strip around the dividing line for a pair beating `best.dist`.
///
/// The strip is sorted by y; for each point only subsequent points whose
/// y-gap is strictly below the current best distance are compared. The bound
/// tightens as better pairs are found. This y-gap early exit is what keeps
/// the inner scan amortized constant per point and must not be widened.
///
/// Empty and singleton strips return `best` unchanged.
fn closest_in_strip(mut strip: Vec<Vector2<f64>>, mut best: ClosestPair) -> ClosestPair {
    strip.sort_by(cmp_y);
    for i in 0..strip.len() {
        for j in (i + 1)..strip.len() {
            if strip[j].y - strip[i].y >= best.dist {
                break;
            }
            let d = distance(strip[i], strip[j]);
            if d < best.dist {
                best = ClosestPair::new(d, (strip[i], strip[j]));
            }
        }
    }
    best
}

/// Recursive driver over an x-sorted sub-range.
fn closest_recursive(points: &[Vector2<f64>]) -> ClosestPair {
    let n = points.len();
    if n <= 3 {
        return brute_force(points);
    }

    let mid = n / 2;
    let mid_x = points[mid].x;
    let left = closest_recursive(&points[..mid]);
    let right = closest_recursive(&points[mid..]);
    // strict <: exact ties keep the right half's pair
    let best = if left.dist < right.dist { left } else { right };

    // All points of this sub-range (both halves) strictly within `best.dist`
    // of the dividing line are cross-half candidates.
    let strip: Vec<Vector2<f64>> = points
        .iter()
        .copied()
        .filter(|p| (p.x - mid_x).abs() < best.dist)
        .collect();
    closest_in_strip(strip, best)
}

/// Find the closest pair among `points`.
///
/// Sorts a copy by x (stable, so equal-x points keep their input order) and
/// runs the divide-and-conquer recursion. O(N log N).
///
/// Errors with [`InsufficientInput`] when fewer than two points are supplied.
pub fn find_closest_pair(points: &[Vector2<f64>]) -> Result<ClosestPair, InsufficientInput> {
    if points.len() < 2 {
        return Err(InsufficientInput { got: points.len() });
    }
    let mut sorted = points.to_vec();
    sorted.sort_by(cmp_x);
    Ok(closest_recursive(&sorted))
}
