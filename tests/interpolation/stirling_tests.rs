use tabula::interpolation::algorithms::{Algorithm, Parity};
use tabula::interpolation::errors::{ErrorKind, InterpolationError};
use tabula::interpolation::stirling::{interpolate, Stirling, StirlingCfg};
use tabula::interpolation::Interpolator;

use super::common::{approx_eq, assert_vec_close, grid};

type TabulaResult = Result<(), InterpolationError>;

#[test]
fn three_point_quadratic() -> TabulaResult {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 4.0];
    let p = Stirling::new(&x, &y)?;

    assert!(approx_eq(p.eval(0.5)?, 0.25));
    assert!(approx_eq(p.eval(1.5)?, 2.25));
    Ok(())
}

#[test]
fn five_point_cubic_via_cfg() -> TabulaResult {
    let (x, y) = grid(5, 0.0, 1.0, |t| t * t * t);
    let x_eval = [1.1, 2.0, 2.3, 3.9];

    let cfg = StirlingCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "stirling");
    let expected: Vec<f64> = x_eval.iter().map(|t| t * t * t).collect();
    assert_vec_close(&rep.evaluated, &expected);
    Ok(())
}

#[test]
fn reproduces_nodes() -> TabulaResult {
    let (x, y) = grid(9, 1.0, 0.25, f64::ln);
    let p = Stirling::new(&x, &y)?;
    assert_vec_close(&p.eval_many(&x)?, &y);
    Ok(())
}

#[test]
fn even_count_rejected() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 4.0, 9.0];
    let err = Stirling::new(&x, &y).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::ParityMismatch { algorithm: Algorithm::Stirling, got: 4, required: Parity::Odd }
    ));
    assert_eq!(err.kind(), ErrorKind::Precondition);
}

#[test]
fn non_uniform_spacing_rejected() {
    let err = Stirling::new(&[0.0, 1.0, 3.0], &[0.0, 1.0, 9.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonUniformSpacing { .. }));
}
