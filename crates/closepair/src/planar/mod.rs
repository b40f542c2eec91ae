//! Planar closest-pair algorithm.
//!
//! Purpose
//! - Provide the divide-and-conquer closest-pair solver plus the quadratic
//!   brute-force baseline it bottoms out on (and is tested against).
//! - Keep the API minimal: one entry point, one result type, one error.
//!
//! Layout
//! - `types`: result and error types.
//! - `solvers`: brute force, strip merge, recursive driver, entry point.
//! - `util`: distance metric and coordinate comparators.
//! - `rand`: seeded random point clouds for tests, benches, and generators.

pub mod rand;
mod solvers;
mod types;
mod util;

pub use solvers::{brute_force, find_closest_pair};
pub use types::{ClosestPair, InsufficientInput};
pub use util::distance;
