//! Error taxonomy for lattice-size computation.
//!
//! Every variant is unrecoverable for the current call: the invariant is
//! computed exactly or not at all, with no partial results.

use thiserror::Error;

/// Errors surfaced by the width evaluator and the reduction driver.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LatticeError {
    /// The polygon has no vertices; widths are undefined.
    #[error("polygon has no vertices")]
    EmptyInput,
    /// The polygon is not 2-dimensional in the current frame: the smaller
    /// axis width is zero, so the reduction step is undefined.
    #[error("degenerate polygon: lattice width along an axis is zero")]
    DegenerateInput,
    /// An internal invariant failed; a logic bug, not a user error.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),
}
