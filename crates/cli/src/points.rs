//! Points-file reader and writer (the core's point source collaborator).
//!
//! Format: one `x y` pair per line, whitespace separated. Blank lines are
//! skipped. The reader validates what the core does not: records must parse
//! and coordinates must be finite, with errors carrying `file:line` context.

use anyhow::{bail, Context, Result};
use nalgebra::Vector2;
use std::fs;
use std::path::Path;

pub fn read_points(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading points file {}", path.display()))?;
    let mut pts = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lineno = idx + 1;
        let mut fields = line.split_whitespace();
        let (Some(xs), Some(ys)) = (fields.next(), fields.next()) else {
            bail!("{}:{lineno}: expected `x y`, got {line:?}", path.display());
        };
        if fields.next().is_some() {
            bail!(
                "{}:{lineno}: trailing fields after `x y` in {line:?}",
                path.display()
            );
        }
        let x: f64 = xs
            .parse()
            .with_context(|| format!("{}:{lineno}: bad x coordinate {xs:?}", path.display()))?;
        let y: f64 = ys
            .parse()
            .with_context(|| format!("{}:{lineno}: bad y coordinate {ys:?}", path.display()))?;
        if !x.is_finite() || !y.is_finite() {
            bail!("{}:{lineno}: non-finite coordinate in {line:?}", path.display());
        }
        pts.push(Vector2::new(x, y));
    }
    Ok(pts)
}

pub fn write_points(path: &Path, pts: &[Vector2<f64>]) -> Result<()> {
    let mut out = String::with_capacity(pts.len() * 16);
    for p in pts {
        out.push_str(&format!("{} {}\n", p.x, p.y));
    }
    fs::write(path, out).with_context(|| format!("writing points file {}", path.display()))
}
