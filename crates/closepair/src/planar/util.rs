use std::cmp::Ordering;

use nalgebra::Vector2;

/// Euclidean distance between two points.
///
/// Pure and total for finite coordinates. Non-finite inputs propagate NaN and
/// break the orderings the solvers rely on; callers supply finite points.
#[inline]
pub fn distance(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    (p - q).norm()
}

#[inline]
pub(crate) fn cmp_x(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal)
}

#[inline]
pub(crate) fn cmp_y(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal)
}
