//! Newton Finite-Difference Interpolation
//!
//! Newton's forward and backward formulas on a uniform grid with step `h`.
//! With `mid = n / 2`, queries `x <= x[mid]` use the forward formula
//! anchored at the first node, anything else the backward formula anchored
//! at the last node:
//!
//! ```text
//! forward   t = (x - x_0) / h
//!           P = y_0 + Σ_{k=1}^{n-1} t(t-1)...(t-k+1) / k! · Δ^k y_0
//! backward  t = (x - x_{n-1}) / h
//!           P = y_{n-1} + Σ_{k=1}^{n-1} t(t+1)...(t+k-1) / k! · Δ^k y_{n-k-1}
//! ```
//!
//! The backward formula walks the trailing diagonal of the [`ForwardTable`].


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg, DEFAULT_SPACING_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::tables::ForwardTable;
use crate::interpolation::traits::Interpolator;
use crate::interpolation::validation::{ensure_finite, validate};


/// Newton finite-difference configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Defaults
/// - Uniform spacing tolerance [`DEFAULT_SPACING_TOL`].
#[derive(Debug, Clone, Copy)]
pub struct NewtonFiniteCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonFiniteCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonFiniteCfg<'a>);


#[derive(Debug, Clone)]
pub struct NewtonFinite<'a> {
    x: &'a [f64],
    h: f64,
    table: ForwardTable,
}

impl<'a> NewtonFinite<'a> {
    pub fn new(x: &'a [f64], y: &[f64]) -> Result<Self, InterpolationError> {
        Self::with_spacing_tol(x, y, DEFAULT_SPACING_TOL)
    }

    /// # Errors
    /// - [`InterpolationError::NonUniformSpacing`] if any gap deviates from
    ///   `x[1] - x[0]` by more than `spacing_tol`
    pub fn with_spacing_tol(x: &'a [f64], y: &[f64], spacing_tol: f64) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        let grid  = validate(Algorithm::NewtonFinite, x, spacing_tol)?;
        let table = ForwardTable::build(y)?;
        Ok(Self { x, h: grid.h, table })
    }

    fn forward(&self, xq: f64) -> f64 {
        let n = self.x.len();
        let t = (xq - self.x[0]) / self.h;

        let mut result    = self.table.row(0)[0];
        let mut factorial = 1.0;
        let mut product   = 1.0;
        for k in 1..n {
            product   *= t - (k - 1) as f64;
            factorial *= k as f64;
            result    += product * self.table.row(k)[0] / factorial;
        }
        result
    }

    fn backward(&self, xq: f64) -> f64 {
        let n = self.x.len();
        let t = (xq - self.x[n - 1]) / self.h;

        let mut result    = self.table.row(0)[n - 1];
        let mut factorial = 1.0;
        let mut product   = 1.0;
        for k in 1..n {
            product   *= t + (k - 1) as f64;
            factorial *= k as f64;
            result    += product * self.table.row(k)[n - k - 1] / factorial;
        }
        result
    }
}

impl Interpolator for NewtonFinite<'_> {
    fn algorithm(&self) -> Algorithm { Algorithm::NewtonFinite }

    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let mid = self.x.len() / 2;
        let value = if xq <= self.x[mid] {
            self.forward(xq)
        } else {
            self.backward(xq)
        };
        ensure_finite(Algorithm::NewtonFinite, xq, value)
    }
}


/// Performs Newton forward/backward finite-difference interpolation.
///
/// # Errors
/// - Input errors from [`CommonCfg::validate`]
/// - [`InterpolationError::NonUniformSpacing`] on an irregular grid
pub fn interpolate(cfg: NewtonFiniteCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let evals = cfg.common.x_eval();

    let interpolant = NewtonFinite::with_spacing_tol(x, cfg.common.y(), cfg.common.spacing_tol())?;

    let mut report = InterpolationReport::new(Algorithm::NewtonFinite, x.len(), evals.len());
    report.evaluated = interpolant.eval_many(evals)?;
    Ok(report)
}
