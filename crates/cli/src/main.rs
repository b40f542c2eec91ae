use anyhow::Result;
use clap::{Parser, Subcommand};
use closepair::find_closest_pair;
use closepair::planar::rand::{draw_points_uniform, PointCount, ReplayToken, ScatterCfg};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod render;
mod report;

#[derive(Parser)]
#[command(name = "closepair")]
#[command(about = "Closest-pair solver over planar point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Find the closest pair in a points file
    Solve {
        /// Points file, one `x y` pair per line
        #[arg(long)]
        input: PathBuf,
        /// Optional path for a JSON report of the result
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Generate a random points file
    Gen {
        #[arg(long, default_value_t = 256)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Coordinates are drawn from [-half-extent, half-extent] per axis
        #[arg(long, default_value_t = 10.0)]
        half_extent: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Render an SVG scatter plot with the closest pair highlighted
    Plot {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { input, report } => solve(&input, report.as_deref()),
        Action::Gen {
            count,
            seed,
            half_extent,
            out,
        } => gen(count, seed, half_extent, &out),
        Action::Plot { input, out } => plot(&input, &out),
    }
}

fn solve(input: &Path, report_out: Option<&Path>) -> Result<()> {
    let pts = points::read_points(input)?;
    tracing::info!(input = %input.display(), n = pts.len(), "solve");
    let res = find_closest_pair(&pts)?;
    println!(
        "closest pair ({:.6}, {:.6}) -- ({:.6}, {:.6}) at distance {:.6}",
        res.pair.0.x, res.pair.0.y, res.pair.1.x, res.pair.1.y, res.dist
    );
    if let Some(out) = report_out {
        let doc = report::SolveReport::new(&input.to_string_lossy(), pts.len(), &res);
        report::write_report(out, &doc)?;
        tracing::info!(out = %out.display(), "report written");
    }
    Ok(())
}

fn gen(count: usize, seed: u64, half_extent: f64, out: &Path) -> Result<()> {
    let pts = draw_points_uniform(
        ScatterCfg {
            count: PointCount::Fixed(count),
            half_extent,
            duplicate_frac: 0.0,
        },
        ReplayToken { seed, index: 0 },
    );
    points::write_points(out, &pts)?;
    tracing::info!(out = %out.display(), count, seed, "points written");
    Ok(())
}

fn plot(input: &Path, out: &Path) -> Result<()> {
    let pts = points::read_points(input)?;
    let res = find_closest_pair(&pts)?;
    render::write_scatter(out, &pts, &res)?;
    tracing::info!(out = %out.display(), n = pts.len(), "scatter written");
    Ok(())
}
