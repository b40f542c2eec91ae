//! Result and error types for the closest-pair solvers.

use nalgebra::Vector2;

/// A closest-pair answer: the minimum distance found and a pair achieving it.
///
/// Invariants:
/// - `dist` equals the Euclidean distance between `pair.0` and `pair.1`.
/// - No other pair in the queried set is strictly closer.
/// - The order within `pair` is unspecified; callers must not rely on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPair {
    pub dist: f64,
    pub pair: (Vector2<f64>, Vector2<f64>),
}

impl ClosestPair {
    #[inline]
    pub fn new(dist: f64, pair: (Vector2<f64>, Vector2<f64>)) -> Self {
        Self { dist, pair }
    }
}

/// Fewer than two points were supplied to the entry point.
///
/// Not retryable: the same input can never succeed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsufficientInput {
    /// Number of points actually supplied (0 or 1).
    pub got: usize,
}

impl std::fmt::Display for InsufficientInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "closest-pair search needs at least 2 points, got {}",
            self.got
        )
    }
}

impl std::error::Error for InsufficientInput {}
