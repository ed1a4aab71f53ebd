use super::*;
use crate::error::LatticeError;
use crate::geom::{det2, is_unimodular, Mat2i, Vec2i};
use crate::rand::{draw_lattice_polygon, LatticeCfg, ReplayToken};

fn pts(coords: &[(i64, i64)]) -> Vec<Vec2i> {
    coords.iter().map(|&(x, y)| Vec2i::new(x, y)).collect()
}

fn apply(m: &Mat2i, t: Vec2i, points: &[Vec2i]) -> Vec<Vec2i> {
    points.iter().map(|p| m * p + t).collect()
}

#[test]
fn step_reduces_steep_quadrilateral() {
    let p = pts(&[(0, 0), (3, 5), (7, 9), (8, 12)]);
    let outcome = reduction_step(&p).unwrap();
    assert_eq!(
        outcome,
        StepOutcome::Reduce(DirPair {
            h1: Vec2i::new(-1, 1),
            h2: Vec2i::new(1, 0),
        })
    );
}

#[test]
fn step_terminates_on_sheared_quadrilateral() {
    let p = pts(&[(0, 0), (2, 3), (2, 7), (4, 8)]);
    let outcome = reduction_step(&p).unwrap();
    let pair = DirPair {
        h1: Vec2i::new(1, 0),
        h2: Vec2i::new(-2, 1),
    };
    assert_eq!(outcome, StepOutcome::Final(pair));
    // The same change of basis written in the column-vector convention.
    assert_eq!(pair.to_matrix().transpose(), Mat2i::new(1, -2, 0, 1));
}

#[test]
fn step_boundary_branch_on_parallelogram() {
    // Widths (3,3) with a diagonal of width 2: the improvement is not
    // strong enough for another round, so the five-candidate list decides.
    let p = pts(&[(0, 0), (2, 1), (3, 3), (1, 2)]);
    let outcome = reduction_step(&p).unwrap();
    assert_eq!(
        outcome,
        StepOutcome::Final(DirPair {
            h1: Vec2i::new(1, -1),
            h2: Vec2i::new(1, 0),
        })
    );
    assert!(is_unimodular(&outcome.pair().to_matrix()));
}

#[test]
fn step_swaps_axes_when_x_is_wider() {
    // Transpose of the steep quadrilateral: the swap must reproduce the
    // same search with the roles of the axes exchanged.
    let p = pts(&[(0, 0), (5, 3), (9, 7), (12, 8)]);
    let outcome = reduction_step(&p).unwrap();
    assert_eq!(
        outcome,
        StepOutcome::Reduce(DirPair {
            h1: Vec2i::new(1, -1),
            h2: Vec2i::new(0, 1),
        })
    );
}

#[test]
fn unit_triangle_has_size_one() {
    let p = pts(&[(0, 0), (1, 0), (0, 1)]);
    let res = lattice_size(&p).unwrap();
    assert_eq!(res.size, 1);
    assert_eq!(res.transform, Mat2i::identity());
    assert_eq!(res.iterations, 1);
}

#[test]
fn right_triangle_has_size_of_its_legs() {
    for n in 1..6 {
        let p = pts(&[(0, 0), (n, 0), (0, n)]);
        let res = lattice_size(&p).unwrap();
        assert_eq!(res.size, n, "legs {n}");
    }
}

#[test]
fn axis_square_needs_doubled_legs() {
    // No unimodular image of [0,n]^2 fits a simplex with legs below 2n.
    for n in 1..5 {
        let p = pts(&[(0, 0), (n, 0), (n, n), (0, n)]);
        let res = lattice_size(&p).unwrap();
        assert_eq!(res.size, 2 * n, "side {n}");
        assert!(is_unimodular(&res.transform));
    }
}

#[test]
fn steep_quadrilateral_full_run() {
    let p = pts(&[(0, 0), (3, 5), (7, 9), (8, 12)]);
    let res = lattice_size(&p).unwrap();
    assert_eq!(res.size, 6);
    assert_eq!(res.iterations, 2);
    assert_eq!(res.transform, Mat2i::new(-1, 1, 3, -2));
    assert_eq!(det2(&res.transform), -1);
}

#[test]
fn parallelogram_full_run() {
    let p = pts(&[(0, 0), (2, 1), (3, 3), (1, 2)]);
    let res = lattice_size(&p).unwrap();
    assert_eq!(res.size, 4);
    assert_eq!(res.iterations, 1);
}

#[test]
fn collinear_input_is_degenerate() {
    let p = pts(&[(0, 0), (1, 1), (2, 2)]);
    assert_eq!(lattice_size(&p), Err(LatticeError::DegenerateInput));
}

#[test]
fn single_point_is_degenerate() {
    let p = pts(&[(5, 7)]);
    assert_eq!(lattice_size(&p), Err(LatticeError::DegenerateInput));
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(lattice_size(&[]), Err(LatticeError::EmptyInput));
    assert_eq!(reduction_step(&[]), Err(LatticeError::EmptyInput));
}

#[test]
fn transform_certifies_reported_size() {
    let polys = [
        pts(&[(0, 0), (3, 5), (7, 9), (8, 12)]),
        pts(&[(0, 0), (2, 3), (2, 7), (4, 8)]),
        pts(&[(0, 0), (2, 1), (3, 3), (1, 2)]),
        pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]),
    ];
    for p in &polys {
        let res = lattice_size(p).unwrap();
        let image = apply(&res.transform, Vec2i::zeros(), p);
        let ls = extremal_formulas(&image).unwrap();
        assert_eq!(ls[0], res.size);
        assert_eq!(*ls.iter().min().unwrap(), res.size);
    }
}

#[test]
fn size_is_invariant_under_unimodular_maps() {
    let p = pts(&[(0, 0), (3, 5), (7, 9), (8, 12)]);
    let base = lattice_size(&p).unwrap().size;
    let maps = [
        Mat2i::new(1, 1, 0, 1),
        Mat2i::new(1, 0, -2, 1),
        Mat2i::new(0, 1, -1, 0),
        Mat2i::new(2, 1, 1, 1),
    ];
    for u in &maps {
        assert!(is_unimodular(u));
        let image = apply(u, Vec2i::new(-13, 41), &p);
        assert_eq!(lattice_size(&image).unwrap().size, base);
    }
}

#[test]
fn sampled_polygons_terminate_quickly() {
    let cfg = LatticeCfg::default();
    let mut seen = 0;
    for index in 0..200 {
        let tok = ReplayToken { seed: 9, index };
        let Some(p) = draw_lattice_polygon(&cfg, tok) else {
            continue;
        };
        let res = lattice_size(&p).unwrap();
        assert!(res.iterations < 100, "index {index}");
        assert!(is_unimodular(&res.transform));
        seen += 1;
        if seen >= 50 {
            break;
        }
    }
    assert!(seen >= 50, "sampler rejected too many draws");
}
