//! Every formula builds the same interpolating polynomial, so wherever a
//! method's preconditions hold it must agree with Lagrange.

use approx::assert_abs_diff_eq;

use tabula::interpolation::algorithms::Algorithm;
use tabula::interpolation::errors::{ErrorKind, InterpolationError};
use tabula::interpolation::lagrange::Lagrange;
use tabula::interpolation::newton::Newton;
use tabula::interpolation::points::PointSeq;
use tabula::interpolation::Interpolator;
use tabula::solver::build_interpolant;

use super::common::grid;

type TabulaResult = Result<(), InterpolationError>;

const SPACING_TOL: f64 = 1e-8;

fn queries(x: &[f64]) -> Vec<f64> {
    let (lo, hi) = (x[0], x[x.len() - 1]);
    (0..=24).map(|i| lo + (hi - lo) * i as f64 / 24.0).collect()
}

#[test]
fn lagrange_and_newton_agree_on_irregular_nodes() -> TabulaResult {
    let x = [-1.3, -0.2, 0.1, 0.9, 2.4, 3.0];
    let y = [0.4, -2.0, 1.5, 0.0, 3.3, -1.1];

    let l = Lagrange::new(&x, &y)?;
    let n = Newton::new(&x, &y)?;
    for xq in queries(&x) {
        assert_abs_diff_eq!(l.eval(xq)?, n.eval(xq)?, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn every_applicable_method_matches_lagrange() -> TabulaResult {
    for n in 2..=12 {
        let (x, y) = grid(n, -0.7, 0.3, |t| (3.0 * t).sin() + t * t);
        let points = PointSeq::new(x.iter().copied().zip(y.iter().copied()))?;
        let reference = Lagrange::new(&x, &y)?;

        for algorithm in Algorithm::ALL {
            let interpolant = match build_interpolant(algorithm, &points, SPACING_TOL) {
                Ok(p) => p,
                Err(e) => {
                    // only parity may exclude a method on a uniform grid
                    assert!(matches!(e, InterpolationError::ParityMismatch { .. }), "{algorithm} n={n}: {e}");
                    continue;
                }
            };
            for xq in queries(&x) {
                assert_abs_diff_eq!(interpolant.eval(xq)?, reference.eval(xq)?, epsilon = 1e-9);
            }
        }
    }
    Ok(())
}

#[test]
fn every_method_reproduces_quadratic_midpoint() -> TabulaResult {
    let points = PointSeq::new([(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)])?;
    for algorithm in [
        Algorithm::Lagrange,
        Algorithm::NewtonDivided,
        Algorithm::NewtonFinite,
        Algorithm::Gauss,
        Algorithm::Bessel,
    ] {
        let p = build_interpolant(algorithm, &points, SPACING_TOL)?;
        assert_abs_diff_eq!(p.eval(1.5)?, 2.25, epsilon = 1e-6);
    }
    Ok(())
}

#[test]
fn non_uniform_nodes_split_the_methods() -> TabulaResult {
    let points = PointSeq::new([(0.0, 0.0), (1.0, 1.0), (3.0, 9.0)])?;

    for algorithm in Algorithm::ALL {
        let result = build_interpolant(algorithm, &points, SPACING_TOL).and_then(|p| p.eval(2.0));
        if algorithm.requires_uniform_spacing() {
            let err = result.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Precondition, "{algorithm}");
        } else {
            assert_abs_diff_eq!(result?, 4.0, epsilon = 1e-9);
        }
    }
    Ok(())
}

#[test]
fn central_formulas_finite_at_interior_point() -> TabulaResult {
    let odd  = PointSeq::new([(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)])?;
    let even = PointSeq::new([(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)])?;

    let s = build_interpolant(Algorithm::Stirling, &odd, SPACING_TOL)?.eval(0.7)?;
    let b = build_interpolant(Algorithm::Bessel, &even, SPACING_TOL)?.eval(1.7)?;
    assert!(s.is_finite());
    assert!(b.is_finite());
    assert_abs_diff_eq!(s, 0.49, epsilon = 1e-9);
    assert_abs_diff_eq!(b, 2.89, epsilon = 1e-9);
    Ok(())
}
