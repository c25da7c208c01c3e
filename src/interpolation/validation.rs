//! Per-method precondition checks.
//!
//! Run independently for each algorithm before its formula is evaluated:
//! - node count `>= 2` (every method)
//! - node-count parity (odd for Stirling, even for Bessel)
//! - uniform spacing within `spacing_tol` (finite-difference methods)

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;


/// Node grid accepted by [`validate`].
///
/// - `n` : number of nodes
/// - `h` : first gap `x[1] - x[0]`, the grid step when spacing is uniform
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Grid {
    pub n: usize,
    pub h: f64,
}


pub fn check_count(n: usize) -> Result<(), InterpolationError> {
    if n < 2 {
        return Err(InterpolationError::InsufficientPoints { got: n });
    }
    Ok(())
}

pub fn check_parity(algorithm: Algorithm, n: usize) -> Result<(), InterpolationError> {
    match algorithm.required_parity() {
        Some(required) if !required.admits(n) => {
            Err(InterpolationError::ParityMismatch { algorithm, got: n, required })
        }
        _ => Ok(()),
    }
}

/// Returns the common step `h = x[1] - x[0]` if every gap is within
/// `tol` of it.
///
/// # Errors
/// - [`InterpolationError::InsufficientPoints`] below two nodes
/// - [`InterpolationError::NonUniformSpacing`] naming the first offending gap
pub fn uniform_step(x: &[f64], tol: f64) -> Result<f64, InterpolationError> {
    check_count(x.len())?;

    let h = x[1] - x[0];
    for (idx, w) in x.windows(2).enumerate().skip(1) {
        let gap = w[1] - w[0];
        if (gap - h).abs() > tol {
            return Err(InterpolationError::NonUniformSpacing { idx, expected: h, got: gap });
        }
    }
    Ok(h)
}

/// Checks every precondition `algorithm` places on the nodes `x`.
pub fn validate(algorithm: Algorithm, x: &[f64], spacing_tol: f64) -> Result<Grid, InterpolationError> {
    let n = x.len();
    check_count(n)?;
    check_parity(algorithm, n)?;

    let h = if algorithm.requires_uniform_spacing() {
        uniform_step(x, spacing_tol)?
    } else {
        x[1] - x[0]
    };

    Ok(Grid { n, h })
}

/// Rejects NaN/inf produced by a formula.
#[inline]
pub(crate) fn ensure_finite(algorithm: Algorithm, x: f64, value: f64) -> Result<f64, InterpolationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InterpolationError::NonFiniteResult { algorithm, x })
    }
}
