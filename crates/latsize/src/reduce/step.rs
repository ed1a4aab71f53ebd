//! One reduction step: candidate search and the exact case split.
//!
//! The step assumes prior iterations have already realigned the polygon,
//! so the current frame's axis pair is `(1,0)`, `(0,1)`. Every candidate
//! it forms is `h1`, `h2`, or an integer combination `i·h1 + h2`, and the
//! pair it returns is unimodular whenever the axis pair is; the driver
//! still checks before applying.

use num_rational::Ratio;

use crate::error::LatticeError;
use crate::geom::{lattice_width, Vec2i};

use super::types::{DirPair, StepOutcome};

/// First strict minimizer of `lattice_width(points, ·)` over `candidates`.
///
/// Updates only on strict improvement, reproducing deterministic
/// first-occurrence tie-breaking.
fn scan_min(
    points: &[Vec2i],
    candidates: impl IntoIterator<Item = Vec2i>,
) -> Result<(Vec2i, i64), LatticeError> {
    let mut best: Option<(Vec2i, i64)> = None;
    for h in candidates {
        let w = lattice_width(points, h)?;
        if best.map_or(true, |(_, bw)| w < bw) {
            best = Some((h, w));
        }
    }
    best.ok_or(LatticeError::InvariantViolation("empty candidate scan"))
}

/// One reduction step on `points` in the current frame.
///
/// Returns `Reduce` with the next direction pair while the frame still
/// improves, `Final` once the pair is certified final, and
/// `DegenerateInput` when the smaller axis width is zero (the quotient
/// below would be undefined).
pub fn reduction_step(points: &[Vec2i]) -> Result<StepOutcome, LatticeError> {
    let mut h1 = Vec2i::new(1, 0);
    let mut h2 = Vec2i::new(0, 1);
    let mut w1 = lattice_width(points, h1)?;
    let mut w2 = lattice_width(points, h2)?;
    if w2 < w1 {
        std::mem::swap(&mut h1, &mut h2);
        std::mem::swap(&mut w1, &mut w2);
    }
    if w1 == 0 {
        return Err(LatticeError::DegenerateInput);
    }
    let combine = |i: i64| Vec2i::new(i * h1.x + h2.x, i * h1.y + h2.y);

    // Exact rational quotient; floor and ceiling drive the multipliers.
    let q = Ratio::new(w2, w1);
    let fl = q.floor().to_integer();
    let ce = q.ceil().to_integer();
    let (best, min_w) = scan_min(points, [fl, ce, -fl, -ce].into_iter().map(combine))?;

    if min_w < w1 {
        // Strict improvement. Exact test `min_w < (2/3)·w2`, cross-multiplied.
        if 3 * min_w < 2 * w2 {
            return Ok(StepOutcome::Reduce(DirPair { h1: best, h2: h1 }));
        }
        // Boundary regime: the final pair lies among five fixed combinations.
        let five = [h1, h1 + h2, h1 - h2, h1 * 2 + h2, h1 * 2 - h2];
        let (f_j, _) = scan_min(points, five)?;
        let (f_k, _) = scan_min(points, five.into_iter().filter(|&f| f != f_j))?;
        return Ok(StepOutcome::Final(DirPair { h1: f_j, h2: f_k }));
    }

    // No candidate beats w1: sweep the full multiplier range and stop.
    let m = (2 * w2).div_euclid(w1);
    let (best, _) = scan_min(points, (-m..=m).map(combine))?;
    Ok(StepOutcome::Final(DirPair { h1, h2: best }))
}
