//! Exact integer 2D geometry for lattice polygons.
//!
//! Purpose
//! - Provide the integer point/matrix aliases, the support-function width
//!   evaluator, and hull extreme-point extraction used by `reduce` and
//!   `rand`.
//! - Keep every predicate exact: all arithmetic here is on `i64`, so the
//!   case split in the reduction step never sees a rounded value.

mod hull;
mod types;
mod width;

pub use hull::extreme_points;
pub use types::{det2, is_unimodular, Mat2i, Vec2i};
pub use width::lattice_width;
