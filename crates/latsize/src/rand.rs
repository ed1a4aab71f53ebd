//! Random convex lattice polygons (radial draws snapped to Z², replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for the experiment and test
//!   inputs of `reduce::lattice_size`. Draws are parameterizable via
//!   `LatticeCfg` and reproducible via `ReplayToken`.
//!
//! Model
//! - Sample `n` roughly equally spaced angles with bounded jitter, place
//!   points radially within the coordinate bound, round to the integer
//!   lattice, then keep the hull's extreme points. Snapping can collapse a
//!   draw below three extreme points; the sampler reports that as `None`
//!   and the caller advances the token index.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{extreme_points, Vec2i};

/// Vertex count distribution (pre-snap sample count; the hull may keep fewer).
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Lattice-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct LatticeCfg {
    pub vertex_count: VertexCount,
    /// Coordinates land in `[-coord_bound, coord_bound]`.
    pub coord_bound: i64,
    /// Angular jitter as a fraction of the base spacing 2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `coord_bound · (1 − u)`
    /// with `u ∈ [0, radial_jitter]`. Clamped to [0, 0.9].
    pub radial_jitter: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for LatticeCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 5, max: 20 },
            coord_bound: 100,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            random_phase: true,
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

/// Draw a random convex lattice polygon as its hull extreme points.
///
/// The float sampling here only places candidate points; once snapped to
/// Z², everything downstream is exact. Returns `None` when the snapped
/// draw has fewer than three extreme points.
pub fn draw_lattice_polygon(cfg: &LatticeCfg, tok: ReplayToken) -> Option<Vec<Vec2i>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let r0 = cfg.coord_bound.max(1) as f64;
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut pts = Vec::with_capacity(n);
    for k in 0..n {
        let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
        let th = phase + (k as f64) * delta + jitter;
        let r = r0 * (1.0 - rng.gen::<f64>() * rj);
        let x = (th.cos() * r).round() as i64;
        let y = (th.sin() * r).round() as i64;
        pts.push(Vec2i::new(x, y));
    }
    extreme_points(&pts)
}
