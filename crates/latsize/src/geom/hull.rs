//! Extraction of hull extreme points from an integer point set.

use super::Vec2i;

/// Exact orientation test: sign of the cross product of `a→b` and `a→c`.
#[inline]
fn cross(a: Vec2i, b: Vec2i, c: Vec2i) -> i64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Andrew's monotone chain over integer points (CCW order, exact).
///
/// Collinear boundary points are dropped, so the result is exactly the set
/// of extreme points. Returns `None` when the input spans fewer than three
/// extreme points (empty, single, or collinear sets).
pub fn extreme_points(points: &[Vec2i]) -> Option<Vec<Vec2i>> {
    let mut pts: Vec<Vec2i> = points.to_vec();
    pts.sort_by_key(|p| (p.x, p.y));
    pts.dedup();
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Vec2i> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0 {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Vec2i> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0 {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        return None;
    }
    Some(hull)
}
