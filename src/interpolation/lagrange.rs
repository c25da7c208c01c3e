//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation in
//! [Lagrange form](https://en.wikipedia.org/wiki/Lagrange_polynomial):
//!
//! ```text
//! L(x) = Σ_i y_i · Π_{j≠i} (x - x_j) / (x_i - x_j)
//! ```
//!
//! No spacing requirement. `O(n²)` per evaluation point.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;
use crate::interpolation::validation::{check_count, ensure_finite};


/// Lagrange interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LagrangeCfg::new`] then optional setters.
#[derive(Debug, Clone, Copy)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// Lagrange interpolant over borrowed nodes.
#[derive(Debug, Clone)]
pub struct Lagrange<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> Lagrange<'a> {
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        check_count(x.len())?;
        Ok(Self { x, y })
    }
}

impl Interpolator for Lagrange<'_> {
    fn algorithm(&self) -> Algorithm { Algorithm::Lagrange }

    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let (x, y) = (self.x, self.y);
        let mut total = 0.0;

        for i in 0..x.len() {
            let mut basis = y[i];
            for j in 0..x.len() {
                if i == j { continue; }
                let denom = x[i] - x[j];
                if denom == 0.0 {
                    return Err(InterpolationError::ZeroDenominator { x1: x[i], x2: x[j] });
                }
                basis *= (xq - x[j]) / denom;
            }
            total += basis;
        }

        ensure_finite(Algorithm::Lagrange, xq, total)
    }
}


/// Performs Lagrange interpolation.
///
/// # Returns
/// [`InterpolationReport`] with `algorithm_name` `"lagrange"` and one value
/// per evaluation point.
///
/// # Errors
/// - Input errors from [`CommonCfg::validate`]
/// - [`InterpolationError::NonFiniteResult`] on overflow
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    let interpolant = Lagrange::new(x, y)?;

    let mut report = InterpolationReport::new(Algorithm::Lagrange, x.len(), evals.len());
    report.evaluated = interpolant.eval_many(evals)?;
    Ok(report)
}
