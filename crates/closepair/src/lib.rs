//! Closest-pair search in the plane.
//!
//! The crate exposes a single core operation, [`find_closest_pair`]: given at
//! least two 2D points, return the minimum pairwise Euclidean distance and a
//! pair achieving it. The implementation is the classical divide-and-conquer
//! scheme (x-split recursion, y-sorted strip merge, brute force below four
//! points), running in O(N log N).
//!
//! Points are plain `nalgebra` vectors; there is no point newtype. Coordinates
//! are expected to be finite — non-finite values give undefined ordering and
//! are the caller's responsibility to reject (the `cli` crate's file reader
//! does exactly that).

pub mod planar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use planar::{brute_force, distance, find_closest_pair, ClosestPair, InsufficientInput};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::planar::rand::{draw_points_uniform, PointCount, ReplayToken, ScatterCfg};
    pub use crate::planar::{
        brute_force, distance, find_closest_pair, ClosestPair, InsufficientInput,
    };
    pub use nalgebra::Vector2 as Vec2;
}
