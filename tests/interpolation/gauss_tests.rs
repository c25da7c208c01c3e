use tabula::interpolation::errors::{ErrorKind, InterpolationError};
use tabula::interpolation::gauss::{interpolate, Gauss, GaussCfg};
use tabula::interpolation::Interpolator;

use super::common::{approx_eq, assert_vec_close, grid};

type TabulaResult = Result<(), InterpolationError>;

#[test]
fn odd_count_both_branches() -> TabulaResult {
    // x^3 on 0..4, mid node x = 2
    let (x, y) = grid(5, 0.0, 1.0, |t| t * t * t);
    let p = Gauss::new(&x, &y)?;

    assert!(approx_eq(p.eval(2.7)?, 2.7f64.powi(3)));
    assert!(approx_eq(p.eval(1.3)?, 1.3f64.powi(3)));
    Ok(())
}

#[test]
fn even_count_both_branches() -> TabulaResult {
    // mid node x = 1 for four nodes
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 4.0, 9.0];
    let p = Gauss::new(&x, &y)?;

    assert!(approx_eq(p.eval(1.5)?, 2.25));
    assert!(approx_eq(p.eval(0.5)?, 0.25));
    Ok(())
}

#[test]
fn even_count_full_degree() -> TabulaResult {
    // cubic needs the last order on both sides of the middle node
    let (x, y) = grid(4, -1.5, 1.0, |t| 2.0 * t * t * t - t + 1.0);
    let p = Gauss::new(&x, &y)?;

    for xq in [-1.2, -0.7, 0.0, 0.9, 1.4] {
        let expected = 2.0 * xq * xq * xq - xq + 1.0;
        assert!(approx_eq(p.eval(xq)?, expected), "xq={xq}");
    }
    Ok(())
}

#[test]
fn reproduces_nodes_via_cfg() -> TabulaResult {
    let (x, y) = grid(7, -0.3, 0.1, f64::exp);

    let cfg = GaussCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "gauss");
    assert_eq!(rep.n_evaluated, 7);
    assert_vec_close(&rep.evaluated, &y);
    Ok(())
}

#[test]
fn two_points_is_linear() -> TabulaResult {
    let p = Gauss::new(&[0.0, 2.0], &[1.0, 5.0])?;
    assert!(approx_eq(p.eval(0.5)?, 2.0));
    assert!(approx_eq(p.eval(1.5)?, 4.0));
    Ok(())
}

#[test]
fn non_uniform_spacing_rejected() {
    let err = Gauss::new(&[0.0, 1.0, 3.0], &[0.0, 1.0, 9.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonUniformSpacing { .. }));
    assert_eq!(err.kind(), ErrorKind::Precondition);
}
