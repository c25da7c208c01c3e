use tabula::interpolation::errors::{ErrorKind, InterpolationError};
use tabula::interpolation::newton_finite::{interpolate, NewtonFinite, NewtonFiniteCfg};
use tabula::interpolation::Interpolator;

use super::common::{approx_eq, assert_vec_close, grid};

type TabulaResult = Result<(), InterpolationError>;

#[test]
fn quadratic_forward_branch() -> TabulaResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 4.0, 9.0];

    // 1.5 <= x[mid] = 2.0
    let p = NewtonFinite::new(&x, &y)?;
    assert!(approx_eq(p.eval(1.5)?, 2.25));
    Ok(())
}

#[test]
fn quadratic_backward_branch() -> TabulaResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 4.0, 9.0];

    // 2.5 > x[mid] = 2.0
    let p = NewtonFinite::new(&x, &y)?;
    assert!(approx_eq(p.eval(2.5)?, 6.25));
    Ok(())
}

#[test]
fn cubic_with_non_unit_step() -> TabulaResult {
    let (x, y) = grid(5, -1.0, 0.5, |t| t * t * t - 2.0 * t);
    let x_eval = [-0.8, 0.1, 0.7, 0.95];
    let expected: Vec<f64> = x_eval.iter().map(|&t| t * t * t - 2.0 * t).collect();

    let cfg = NewtonFiniteCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "newton_finite");
    assert_vec_close(&rep.evaluated, &expected);
    Ok(())
}

#[test]
fn reproduces_nodes() -> TabulaResult {
    let (x, y) = grid(6, 0.0, 0.2, f64::sin);
    let p = NewtonFinite::new(&x, &y)?;
    assert_vec_close(&p.eval_many(&x)?, &y);
    Ok(())
}

#[test]
fn non_uniform_spacing_rejected() {
    let x = [0.0, 1.0, 3.0];
    let y = [0.0, 1.0, 9.0];
    let err = NewtonFinite::new(&x, &y).unwrap_err();
    assert!(matches!(err, InterpolationError::NonUniformSpacing { idx: 1, .. }));
    assert_eq!(err.kind(), ErrorKind::Precondition);
}

#[test]
fn loose_spacing_tol_accepts_jitter() -> TabulaResult {
    let x = [0.0, 1.0, 2.001];
    let y = [0.0, 1.0, 2.001];

    let strict = NewtonFiniteCfg::new().set_x(&x)?.set_y(&y)?.set_x_eval(&[0.5])?;
    assert!(matches!(interpolate(strict), Err(InterpolationError::NonUniformSpacing { .. })));

    let loose = NewtonFiniteCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[0.5])?
        .set_spacing_tol(1e-2)?;
    let rep = interpolate(loose)?;
    assert!(rep.evaluated[0].is_finite());
    Ok(())
}

#[test]
fn invalid_spacing_tol() {
    let err = NewtonFiniteCfg::new().set_spacing_tol(0.0).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidSpacingTol { got } if got == 0.0));
}
