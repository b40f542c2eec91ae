//! JSON report for a solve run, with the building git revision recorded so
//! results stay traceable to the code that produced them.

use anyhow::{Context, Result};
use closepair::ClosestPair;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::Command;

#[derive(Serialize)]
pub struct SolveReport {
    pub input: String,
    pub n_points: usize,
    pub distance: f64,
    pub pair: [[f64; 2]; 2],
    pub code_rev: String,
}

impl SolveReport {
    pub fn new(input: &str, n_points: usize, res: &ClosestPair) -> Self {
        Self {
            input: input.to_string(),
            n_points,
            distance: res.dist,
            pair: [
                [res.pair.0.x, res.pair.0.y],
                [res.pair.1.x, res.pair.1.y],
            ],
            code_rev: current_git_rev(),
        }
    }
}

pub fn write_report(path: &Path, report: &SolveReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", path.display()))
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn report_writes_valid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("run.json");
        let res = ClosestPair::new(1.0, (vector![0.0, 1.0], vector![0.0, 2.0]));
        let report = SolveReport::new("points.txt", 4, &res);
        write_report(&path, &report).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed["input"], "points.txt");
        assert_eq!(parsed["n_points"], 4);
        assert_eq!(parsed["distance"], 1.0);
        assert_eq!(parsed["pair"][1][1], 2.0);
        assert!(parsed["code_rev"].is_string());
    }
}
