//! Random planar point clouds (uniform scatter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for point clouds used by tests,
//!   benches, and the `gen` subcommand of the driver binary. Draws are
//!   parameterizable and reproducible.
//!
//! Model
//! - Sample `count` points uniformly in the square `[-half_extent, half_extent]²`,
//!   then overwrite a `duplicate_frac` fraction of entries with copies of
//!   other entries (exercises the distance-0 degenerate path).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Uniform-scatter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: PointCount,
    /// Coordinates are drawn from `[-half_extent, half_extent]` per axis.
    pub half_extent: f64,
    /// Fraction of entries overwritten with copies of other entries.
    /// Clamped to [0, 1]. 0 disables duplication.
    pub duplicate_frac: f64,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(64),
            half_extent: 1.0,
            duplicate_frac: 0.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random point cloud.
///
/// The same `(cfg, tok)` always yields the same cloud. Counts below 2 are
/// allowed (useful for exercising the entry point's error path).
pub fn draw_points_uniform(cfg: ScatterCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let h = cfg.half_extent.max(1e-9);
    let mut pts: Vec<Vector2<f64>> = (0..n)
        .map(|_| Vector2::new(rng.gen_range(-h..h), rng.gen_range(-h..h)))
        .collect();
    if n >= 2 {
        let dups = (cfg.duplicate_frac.clamp(0.0, 1.0) * n as f64).round() as usize;
        for _ in 0..dups {
            let src = rng.gen_range(0..n);
            let dst = rng.gen_range(0..n);
            pts[dst] = pts[src];
        }
    }
    pts
}
