//! Result records for the reduction step and the driver.
//!
//! Kept small and explicit to make `step` and `driver` easy to read.

use crate::geom::{Mat2i, Vec2i};

/// A reduced direction pair; rows of the next iteration's transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirPair {
    pub h1: Vec2i,
    pub h2: Vec2i,
}

impl DirPair {
    /// Transform matrix with rows `h1`, `h2`.
    #[inline]
    pub fn to_matrix(self) -> Mat2i {
        Mat2i::new(self.h1.x, self.h1.y, self.h2.x, self.h2.y)
    }
}

/// Outcome of a single reduction step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The pair strictly improves the frame; transform and iterate.
    Reduce(DirPair),
    /// The pair is final; transform once more and finalize.
    Final(DirPair),
}

impl StepOutcome {
    #[inline]
    pub fn pair(self) -> DirPair {
        match self {
            StepOutcome::Reduce(p) | StepOutcome::Final(p) => p,
        }
    }
}

/// Result of a full `lattice_size` run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatticeSize {
    /// The lattice size of the input polygon.
    pub size: i64,
    /// Unimodular transform mapping the input into the frame where the
    /// first extremal formula attains `size`.
    pub transform: Mat2i,
    /// Number of reduction steps taken. Diagnostic only.
    pub iterations: u32,
}
