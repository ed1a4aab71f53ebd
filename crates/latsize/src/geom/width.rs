//! Support-function width of a point set along an integer direction.

use super::Vec2i;
use crate::error::LatticeError;

/// Lattice width of `points` along `h`: `max ⟨v,h⟩ − min ⟨v,h⟩`.
///
/// Pure and translation invariant, with `lattice_width(P, h) ==
/// lattice_width(P, -h)`. Correct over any point set containing all
/// extreme points of the hull: interior points never attain a strict
/// extremum of a linear functional.
pub fn lattice_width(points: &[Vec2i], h: Vec2i) -> Result<i64, LatticeError> {
    let (first, rest) = points.split_first().ok_or(LatticeError::EmptyInput)?;
    let mut lo = first.x * h.x + first.y * h.y;
    let mut hi = lo;
    for p in rest {
        let s = p.x * h.x + p.y * h.y;
        lo = lo.min(s);
        hi = hi.max(s);
    }
    Ok(hi - lo)
}
