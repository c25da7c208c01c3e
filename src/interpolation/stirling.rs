//! Stirling Central-Difference Interpolation
//!
//! Arithmetic mean of the Gauss forward and backward formulas around the
//! unique center node of an odd number of uniformly spaced nodes:
//!
//! ```text
//! t = (x - x_c) / h
//! P = ½ · ( Σ_fwd + Σ_bwd )
//! ```
//!
//! Both sums start at `y_c` and scale order `k` by `1 / k!`. The forward sum
//! multiplies by `(t + s_{k-1})` and reads the middle of row `k`; the backward
//! sum multiplies by `(t - s_{k-1})` and reads one entry earlier when the row
//! length is even, with `s = [0, -1, 1, -2, 2, ...]`.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg, DEFAULT_SPACING_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::gauss::{backward_sum, forward_sum};
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::tables::ForwardTable;
use crate::interpolation::traits::Interpolator;
use crate::interpolation::validation::{ensure_finite, validate};


/// Stirling interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// Requires an odd number of nodes.
#[derive(Debug, Clone, Copy)]
pub struct StirlingCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> StirlingCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(StirlingCfg<'a>);


#[derive(Debug, Clone)]
pub struct Stirling<'a> {
    x: &'a [f64],
    h: f64,
    center: usize,
    table: ForwardTable,
}

impl<'a> Stirling<'a> {
    pub fn new(x: &'a [f64], y: &[f64]) -> Result<Self, InterpolationError> {
        Self::with_spacing_tol(x, y, DEFAULT_SPACING_TOL)
    }

    /// # Errors
    /// - [`InterpolationError::ParityMismatch`] on an even node count
    /// - [`InterpolationError::NonUniformSpacing`] on an irregular grid
    pub fn with_spacing_tol(x: &'a [f64], y: &[f64], spacing_tol: f64) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        let grid  = validate(Algorithm::Stirling, x, spacing_tol)?;
        let table = ForwardTable::build(y)?;
        Ok(Self { x, h: grid.h, center: (grid.n - 1) / 2, table })
    }
}

impl Interpolator for Stirling<'_> {
    fn algorithm(&self) -> Algorithm { Algorithm::Stirling }

    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let t = (xq - self.x[self.center]) / self.h;

        let s_forward  = forward_sum(&self.table, self.center, t);
        let s_backward = backward_sum(&self.table, self.center, t);

        ensure_finite(Algorithm::Stirling, xq, 0.5 * (s_forward + s_backward))
    }
}


/// Performs Stirling interpolation.
///
/// # Errors
/// - Input errors from [`CommonCfg::validate`]
/// - [`InterpolationError::ParityMismatch`] on an even node count
/// - [`InterpolationError::NonUniformSpacing`] on an irregular grid
pub fn interpolate(cfg: StirlingCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let evals = cfg.common.x_eval();

    let interpolant = Stirling::with_spacing_tol(x, cfg.common.y(), cfg.common.spacing_tol())?;

    let mut report = InterpolationReport::new(Algorithm::Stirling, x.len(), evals.len());
    report.evaluated = interpolant.eval_many(evals)?;
    Ok(report)
}
