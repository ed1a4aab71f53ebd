//! Iterated basis reduction for the lattice size of a lattice polygon.
//!
//! Structure
//! - `types`: result records for the step and the driver.
//! - `step`: one combinatorial search over candidate direction vectors,
//!   deciding via an exact case split whether the frame improves or the
//!   current pair is final.
//! - `driver`: the fixed-point loop, transform accumulation, and the
//!   4-way extremal finalization.

mod driver;
mod step;
mod types;

pub use driver::{extremal_formulas, lattice_size};
pub use step::reduction_step;
pub use types::{DirPair, LatticeSize, StepOutcome};

#[cfg(test)]
mod tests;
