//! The reduction loop: transform accumulation and extremal finalization.

use crate::error::LatticeError;
use crate::geom::{det2, Mat2i, Vec2i};

use super::step::reduction_step;
use super::types::{LatticeSize, StepOutcome};

/// Defensive cap on reduction steps. Termination is guaranteed because
/// every non-final step strictly decreases a width measure; exceeding the
/// cap signals a logic bug.
const MAX_STEPS: u32 = 1000;

/// The four symmetric extremal formulas over a point set:
///
/// `[max(x+y) − min x − min y,  −min(x+y) + max x + max y,
///   max(x−y) − min x + max y,  max(−x+y) + max x − min y]`
///
/// Each is translation invariant. Returns `None` on an empty set.
pub fn extremal_formulas(points: &[Vec2i]) -> Option<[i64; 4]> {
    let first = points.first()?;
    let (mut min_x, mut max_x) = (first.x, first.x);
    let (mut min_y, mut max_y) = (first.y, first.y);
    let (mut min_sum, mut max_sum) = (first.x + first.y, first.x + first.y);
    let (mut min_diff, mut max_diff) = (first.x - first.y, first.x - first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
        min_sum = min_sum.min(p.x + p.y);
        max_sum = max_sum.max(p.x + p.y);
        min_diff = min_diff.min(p.x - p.y);
        max_diff = max_diff.max(p.x - p.y);
    }
    Some([
        max_sum - min_x - min_y,
        -min_sum + max_x + max_y,
        max_diff - min_x + max_y,
        -min_diff + max_x - min_y,
    ])
}

/// Lattice size of the polygon spanned by `points`, with the certifying
/// unimodular transform and the number of reduction steps taken.
///
/// `points` may be any finite superset of the hull's extreme points; order
/// and convexity are never exploited. On success, applying `transform` to
/// the input and evaluating `extremal_formulas` yields `size` as the
/// minimum, attained by the first formula.
pub fn lattice_size(points: &[Vec2i]) -> Result<LatticeSize, LatticeError> {
    if points.is_empty() {
        return Err(LatticeError::EmptyInput);
    }
    let mut pts = points.to_vec();
    let mut acc = Mat2i::identity();
    let mut iterations = 0u32;
    loop {
        let outcome = reduction_step(&pts)?;
        let t = outcome.pair().to_matrix();
        if det2(&t).abs() != 1 {
            return Err(LatticeError::InvariantViolation(
                "reduced pair is not unimodular",
            ));
        }
        for p in &mut pts {
            *p = t * *p;
        }
        // Left-compose so `acc` always maps the original input to `pts`.
        acc = t * acc;
        iterations += 1;
        if matches!(outcome, StepOutcome::Final(_)) {
            break;
        }
        if iterations >= MAX_STEPS {
            return Err(LatticeError::InvariantViolation(
                "reduction did not terminate within the step bound",
            ));
        }
    }

    let ls = extremal_formulas(&pts).ok_or(LatticeError::EmptyInput)?;
    let mut j = 0;
    for k in 1..4 {
        if ls[k] < ls[j] {
            j = k;
        }
    }
    // Canonical orientation: flip rows of the accumulated transform so the
    // winning formula becomes the first one on the transformed input.
    match j {
        0 => {}
        1 => acc = -acc,
        2 => {
            acc[(1, 0)] = -acc[(1, 0)];
            acc[(1, 1)] = -acc[(1, 1)];
        }
        _ => {
            acc[(0, 0)] = -acc[(0, 0)];
            acc[(0, 1)] = -acc[(0, 1)];
        }
    }
    Ok(LatticeSize {
        size: ls[j],
        transform: acc,
        iterations,
    })
}
