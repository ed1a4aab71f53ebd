//! Integer 2D aliases and small matrix helpers.
//!
//! Directions double as linear functionals (`h` acts by `v ↦ h.x·v.x +
//! h.y·v.y`) and as rows of a transform matrix; unimodularity of that
//! matrix is what preserves the lattice-point structure across reductions.

use nalgebra::{Matrix2, Vector2};

/// Integer point or direction vector in Z².
pub type Vec2i = Vector2<i64>;

/// Integer 2×2 matrix; rows act as linear functionals on points.
pub type Mat2i = Matrix2<i64>;

/// Determinant of a 2×2 integer matrix.
///
/// nalgebra's `determinant` is only defined over fields, so we spell out
/// the 2×2 case.
#[inline]
pub fn det2(m: &Mat2i) -> i64 {
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
}

/// A transform is bijective on the integer lattice iff `|det| = 1`.
#[inline]
pub fn is_unimodular(m: &Mat2i) -> bool {
    det2(m).abs() == 1
}
