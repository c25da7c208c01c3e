use tabula::interpolation::algorithms::{Algorithm, Parity};
use tabula::interpolation::bessel::{interpolate, Bessel, BesselCfg};
use tabula::interpolation::errors::{ErrorKind, InterpolationError};
use tabula::interpolation::Interpolator;

use super::common::{approx_eq, assert_vec_close, grid};

type TabulaResult = Result<(), InterpolationError>;

#[test]
fn four_point_quadratic() -> TabulaResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 4.0, 9.0];
    let p = Bessel::new(&x, &y)?;

    assert!(approx_eq(p.eval(1.5)?, 2.25));
    assert!(approx_eq(p.eval(0.25)?, 0.0625));
    Ok(())
}

#[test]
fn two_points_midpoint() -> TabulaResult {
    let p = Bessel::new(&[0.0, 2.0], &[1.0, 5.0])?;
    assert!(approx_eq(p.eval(1.0)?, 3.0));
    Ok(())
}

#[test]
fn six_point_quintic_via_cfg() -> TabulaResult {
    let f = |t: f64| t.powi(5) - 3.0 * t.powi(2) + 2.0;
    let (x, y) = grid(6, -1.0, 0.4, f);
    let x_eval = [-0.9, -0.1, 0.0, 0.15, 0.75];

    let cfg = BesselCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "bessel");
    let expected: Vec<f64> = x_eval.iter().map(|&t| f(t)).collect();
    assert_vec_close(&rep.evaluated, &expected);
    Ok(())
}

#[test]
fn reproduces_nodes() -> TabulaResult {
    let (x, y) = grid(8, 0.0, 0.3, f64::cos);
    let p = Bessel::new(&x, &y)?;
    assert_vec_close(&p.eval_many(&x)?, &y);
    Ok(())
}

#[test]
fn odd_count_rejected() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 4.0];
    let err = Bessel::new(&x, &y).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::ParityMismatch { algorithm: Algorithm::Bessel, got: 3, required: Parity::Even }
    ));
    assert_eq!(err.kind(), ErrorKind::Precondition);
}

#[test]
fn non_uniform_spacing_rejected() {
    let err = Bessel::new(&[0.0, 1.0, 3.0, 4.0], &[0.0, 1.0, 9.0, 16.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonUniformSpacing { idx: 1, .. }));
}
