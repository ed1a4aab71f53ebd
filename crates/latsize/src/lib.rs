//! Exact computation of the lattice size of a convex lattice polygon.
//!
//! Scope
//! - `geom`: integer 2D primitives, the support-function width evaluator,
//!   and hull extreme-point extraction.
//! - `reduce`: the iterative basis-reduction step and the driver that
//!   extracts the invariant and its certifying unimodular transform.
//! - `rand`: reproducible random convex lattice polygons for experiments.
//!
//! All algorithmic arithmetic is integer or exact rational; floating point
//! never decides a branch. Results are a triple
//! `(size, transform, iterations)` per run.

pub mod error;
pub mod geom;
pub mod rand;
pub mod reduce;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::LatticeError;
pub use geom::{Mat2i, Vec2i};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::LatticeError;
    pub use crate::geom::{det2, extreme_points, is_unimodular, lattice_width, Mat2i, Vec2i};
    pub use crate::rand::{draw_lattice_polygon, LatticeCfg, ReplayToken, VertexCount};
    pub use crate::reduce::{
        extremal_formulas, lattice_size, reduction_step, DirPair, LatticeSize, StepOutcome,
    };
}
