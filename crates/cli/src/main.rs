use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use latsize::prelude::*;

#[derive(Parser)]
#[command(name = "latsize")]
#[command(about = "Lattice-size runner and polygon sampler")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the lattice size of a polygon given as JSON [[x, y], ...]
    Size {
        #[arg(long)]
        input: String,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Sample random lattice polygons and report sizes and step counts
    Sample {
        #[arg(long, default_value_t = 100)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Coordinate bound for sampled vertices
        #[arg(long, default_value_t = 100)]
        bound: i64,
        #[arg(long)]
        out: Option<String>,
    },
}

#[derive(Serialize)]
struct SizeReport {
    size: i64,
    transform: [[i64; 2]; 2],
    iterations: u32,
}

impl From<LatticeSize> for SizeReport {
    fn from(res: LatticeSize) -> Self {
        let m = res.transform;
        Self {
            size: res.size,
            transform: [[m[(0, 0)], m[(0, 1)]], [m[(1, 0)], m[(1, 1)]]],
            iterations: res.iterations,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Size { input, out } => size(input, out),
        Action::Sample {
            count,
            seed,
            bound,
            out,
        } => sample(count, seed, bound, out),
    }
}

fn parse_polygon(raw: &str) -> Result<Vec<Vec2i>> {
    let coords: Vec<[i64; 2]> =
        serde_json::from_str(raw).context("polygon must be a JSON array of [x, y] pairs")?;
    Ok(coords.into_iter().map(|[x, y]| Vec2i::new(x, y)).collect())
}

fn size(input: String, out: Option<String>) -> Result<()> {
    let raw = std::fs::read_to_string(&input).with_context(|| format!("reading {input}"))?;
    let poly = parse_polygon(&raw)?;
    let res = lattice_size(&poly)?;
    tracing::info!(size = res.size, iterations = res.iterations, "size");
    emit(serde_json::to_string_pretty(&SizeReport::from(res))?, out)
}

fn sample(count: u64, seed: u64, bound: i64, out: Option<String>) -> Result<()> {
    let cfg = LatticeCfg {
        coord_bound: bound,
        ..LatticeCfg::default()
    };
    let budget = count.saturating_mul(16).max(1024);
    let mut reports: Vec<SizeReport> = Vec::new();
    let mut max_iterations = 0u32;
    let mut index = 0u64;
    while (reports.len() as u64) < count {
        if index >= budget {
            bail!("sampler kept rejecting degenerate draws (bound {bound} too tight?)");
        }
        let tok = ReplayToken { seed, index };
        index += 1;
        let Some(poly) = draw_lattice_polygon(&cfg, tok) else {
            continue;
        };
        let res = lattice_size(&poly)?;
        max_iterations = max_iterations.max(res.iterations);
        reports.push(SizeReport::from(res));
    }
    tracing::info!(
        count = reports.len(),
        max_iterations,
        draws = index,
        "sample"
    );
    emit(serde_json::to_string_pretty(&reports)?, out)
}

fn emit(json: String, out: Option<String>) -> Result<()> {
    match out {
        Some(path) => {
            let out_path = Path::new(&path);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(out_path, json).with_context(|| format!("writing {path}"))?;
        }
        None => println!("{json}"),
    }
    Ok(())
}
