use tabula::interpolation::errors::{ErrorKind, InterpolationError};
use tabula::interpolation::newton::{interpolate, Newton, NewtonCfg};
use tabula::interpolation::Interpolator;

use super::common::{approx_eq, assert_vec_close};

type TabulaResult = Result<(), InterpolationError>;

#[test]
fn quadratic_global_match() -> TabulaResult {
    let x      = [0.0, 1.0, 2.0];
    let y      = [0.0, 1.0, 4.0];
    let x_eval = [0.5, 1.5];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "newton_divided");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    assert!(approx_eq(rep.evaluated[0], 0.25));
    assert!(approx_eq(rep.evaluated[1], 2.25));
    Ok(())
}

#[test]
fn exact_hits() -> TabulaResult {
    let x_for_cfg  = [0.0, 1.0, 2.0, 3.0];
    let y_for_cfg  = [0.0, 1.0, 4.0, 9.0];
    let x_eval     = [0.0, 1.0, 2.0, 3.0];
    let y_expected = [0.0, 1.0, 4.0, 9.0];

    let cfg = NewtonCfg::new()
        .set_x(&x_for_cfg)?
        .set_y(&y_for_cfg)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_vec_close(&rep.evaluated, &y_expected);
    Ok(())
}

#[test]
fn irregular_nodes_reproduce_quadratic() -> TabulaResult {
    let x = [0.0, 1.0, 3.0];
    let y = [0.0, 1.0, 9.0];

    let p = Newton::new(&x, &y)?;
    assert_eq!(p.table().coefficients(), &[0.0, 1.0, 1.0]);
    assert!(approx_eq(p.eval(2.0)?, 4.0));
    Ok(())
}

#[test]
fn extrapolates_outside_nodes() -> TabulaResult {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 4.0];

    let p = Newton::new(&x, &y)?;
    assert!(approx_eq(p.eval(-1.0)?, 1.0));
    assert!(approx_eq(p.eval(4.0)?, 16.0));
    Ok(())
}

#[test]
fn missing_y_is_data_error() {
    let x   = [0.0, 1.0];
    let cfg = NewtonCfg::new().set_x(&x).unwrap();
    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
    assert_eq!(err.kind(), ErrorKind::Data);
}

#[test]
fn unequal_length_error() {
    let x  = [0.0, 1.0, 2.0];
    let y  = [0.0, 1.0];
    let cfg = NewtonCfg::new().set_x(&x).unwrap();
    let err = cfg.set_y(&y).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
}

#[test]
fn non_increasing_x_error() {
    let x = [0.0, 2.0, 1.0];
    let err = NewtonCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::NonIncreasingX));
}

#[test]
fn near_duplicate_x_error() {
    let x = [0.0, 1e-13, 1.0];
    let err = NewtonCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));
}

#[test]
fn duplicate_x_direct_is_computation_error() {
    let x = [1.0, 1.0];
    let y = [2.0, 3.0];
    let err = Newton::new(&x, &y).unwrap_err();
    assert!(matches!(err, InterpolationError::ZeroDenominator { .. }));
    assert_eq!(err.kind(), ErrorKind::Computation);
}

#[test]
fn empty_x_eval_ok() -> TabulaResult {
    let x = [0.0, 1.0];
    let y = [0.0, 1.0];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[])?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.n_provided, 2);
    assert_eq!(rep.n_evaluated, 0);
    assert!(rep.evaluated.is_empty());
    Ok(())
}

#[test]
fn two_points() -> TabulaResult {
    let x      = [2.0, 4.0];
    let y      = [5.0, 9.0];
    let x_eval = [3.0];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert!(approx_eq(rep.evaluated[0], 7.0));
    Ok(())
}

#[test]
fn many_points() -> TabulaResult {
    let x_for_cfg      = [0.0, 1.0, 3.0, 6.0, 10.0];
    let y_for_cfg      = [0.0, 2.0, 3.0, 3.0, 8.0];
    let x_eval_for_cfg = [0.0, 1.0, 3.0, 6.0, 10.0];
    let y_at_nodes     = [0.0, 2.0, 3.0, 3.0, 8.0];

    let cfg = NewtonCfg::new()
        .set_x(&x_for_cfg)?
        .set_y(&y_for_cfg)?
        .set_x_eval(&x_eval_for_cfg)?;

    let rep = interpolate(cfg)?;
    assert_vec_close(&rep.evaluated, &y_at_nodes);
    Ok(())
}
