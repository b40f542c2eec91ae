//! SVG scatter plot of a point cloud with the closest pair highlighted.
//!
//! Output mirrors the usual closest-pair picture: all points in blue, the
//! winning pair in red, connected by a dashed segment. The view box is fitted
//! to the data with a small margin; marker sizes scale with the data extent
//! so clouds of any scale render legibly.

use anyhow::{Context, Result};
use closepair::ClosestPair;
use nalgebra::Vector2;
use std::path::Path;
use svg::node::element::{Circle, Line};
use svg::Document;

pub fn scatter_document(points: &[Vector2<f64>], best: &ClosestPair) -> Document {
    let (min, max) = bounds(points);
    let extent = (max.x - min.x).max(max.y - min.y).max(1e-9);
    let pad = 0.05 * extent;
    let r = extent / 120.0;

    let mut document = Document::new().set(
        "viewBox",
        format!(
            "{} {} {} {}",
            min.x - pad,
            min.y - pad,
            (max.x - min.x) + 2.0 * pad,
            (max.y - min.y) + 2.0 * pad
        ),
    );

    // the segment goes under the markers
    let (p, q) = best.pair;
    document = document.add(
        Line::new()
            .set("x1", p.x)
            .set("y1", p.y)
            .set("x2", q.x)
            .set("y2", q.y)
            .set("stroke", "crimson")
            .set("stroke-width", r / 2.0)
            .set("stroke-dasharray", format!("{} {}", r, r)),
    );

    for point in points {
        document = document.add(
            Circle::new()
                .set("cx", point.x)
                .set("cy", point.y)
                .set("r", r)
                .set("fill", "steelblue"),
        );
    }
    for point in [p, q] {
        document = document.add(
            Circle::new()
                .set("cx", point.x)
                .set("cy", point.y)
                .set("r", 1.5 * r)
                .set("fill", "crimson"),
        );
    }
    document
}

pub fn write_scatter(path: &Path, points: &[Vector2<f64>], best: &ClosestPair) -> Result<()> {
    let document = scatter_document(points, best);
    svg::save(path, &document).with_context(|| format!("writing scatter svg {}", path.display()))
}

fn bounds(points: &[Vector2<f64>]) -> (Vector2<f64>, Vector2<f64>) {
    let mut min = Vector2::new(f64::INFINITY, f64::INFINITY);
    let mut max = Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn document_has_markers_and_dashed_segment() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![5.0, 5.0]];
        let best = ClosestPair::new(1.0, (pts[0], pts[1]));
        let rendered = scatter_document(&pts, &best).to_string();
        // 3 cloud markers + 2 highlight markers
        assert_eq!(rendered.matches("<circle").count(), 5);
        assert_eq!(rendered.matches("<line").count(), 1);
        assert!(rendered.contains("stroke-dasharray"));
    }
}
