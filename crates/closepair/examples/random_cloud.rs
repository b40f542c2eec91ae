//! Solve closest-pair on a few random clouds for quick sanity on answers.
//!
//! Usage:
//!   cargo run -p closepair --example random_cloud -- [count]
//!
//! Prints each draw's minimum distance and the achieving pair.

use closepair::prelude::*;

fn main() {
    let count: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(256);
    let cfg = ScatterCfg {
        count: PointCount::Fixed(count),
        half_extent: 10.0,
        duplicate_frac: 0.0,
    };
    for i in 0..5u64 {
        let pts = draw_points_uniform(cfg, ReplayToken { seed: 2025, index: i });
        match find_closest_pair(&pts) {
            Ok(res) => println!(
                "sample {i}: n={count} d={:.6} pair=({:.3}, {:.3})-({:.3}, {:.3})",
                res.dist, res.pair.0.x, res.pair.0.y, res.pair.1.x, res.pair.1.y
            ),
            Err(e) => eprintln!("sample {i}: {e}"),
        }
    }
}
