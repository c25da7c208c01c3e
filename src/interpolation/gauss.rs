//! Gauss Central-Difference Interpolation
//!
//! Anchored at the middle node `mid = (n - 1) / 2` of `n` uniformly spaced
//! nodes, `t = (x - x_mid) / h`. Node offsets are visited in the order
//! `[0, -1, 1, -2, 2, ...]`.
//!
//! ```text
//! forward  (x >= x_mid)
//!   P = y_0 + t Δy_0 + t(t-1)/2! Δ²y_{-1} + (t+1)t(t-1)/3! Δ³y_{-1} + ...
//!   factor k : (t + offset_{k-1}),  entry Δ^k y_{mid - ⌊k/2⌋}
//!
//! backward (x <  x_mid)
//!   P = y_0 + t Δy_{-1} + (t+1)t/2! Δ²y_{-1} + (t+1)t(t-1)/3! Δ³y_{-2} + ...
//!   factor k : (t - offset_{k-1}),  entry Δ^k y_{mid - ⌈k/2⌉}
//! ```
//!
//! For an odd node count the forward entry is the exact middle of row `k`
//! (`len / 2`) and the backward entry steps one toward the start when the
//! row length is even (`len / 2 - 1`).


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg, DEFAULT_SPACING_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::tables::ForwardTable;
use crate::interpolation::traits::Interpolator;
use crate::interpolation::validation::{ensure_finite, validate};


/// Gauss interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
#[derive(Debug, Clone, Copy)]
pub struct GaussCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> GaussCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(GaussCfg<'a>);


/// `j`-th entry of `[0, -1, 1, -2, 2, ...]`
#[inline]
pub(crate) fn offset(j: usize) -> f64 {
    if j == 0 { 0.0 }
    else if j % 2 == 1 { -(((j + 1) / 2) as f64) }
    else { (j / 2) as f64 }
}

/// Column `mid - back` clamped into a row of length `len`.
#[inline]
fn central_index(mid: usize, back: usize, len: usize) -> usize {
    mid.saturating_sub(back).min(len - 1)
}

/// Gauss forward sum around `mid`.
pub(crate) fn forward_sum(table: &ForwardTable, mid: usize, t: f64) -> f64 {
    let mut result    = table.row(0)[mid];
    let mut factorial = 1.0;
    let mut product   = 1.0;

    for k in 1..table.depth() {
        let row = table.row(k);
        product   *= t + offset(k - 1);
        factorial *= k as f64;
        result    += product * row[central_index(mid, k / 2, row.len())] / factorial;
    }
    result
}

/// Gauss backward sum around `mid`.
pub(crate) fn backward_sum(table: &ForwardTable, mid: usize, t: f64) -> f64 {
    let mut result    = table.row(0)[mid];
    let mut factorial = 1.0;
    let mut product   = 1.0;

    for k in 1..table.depth() {
        let row = table.row(k);
        product   *= t - offset(k - 1);
        factorial *= k as f64;
        // an even node count runs out of left nodes at the last order,
        // where the row has a single entry anyway
        result    += product * row[central_index(mid, (k + 1) / 2, row.len())] / factorial;
    }
    result
}


#[derive(Debug, Clone)]
pub struct Gauss<'a> {
    x: &'a [f64],
    h: f64,
    mid: usize,
    table: ForwardTable,
}

impl<'a> Gauss<'a> {
    pub fn new(x: &'a [f64], y: &[f64]) -> Result<Self, InterpolationError> {
        Self::with_spacing_tol(x, y, DEFAULT_SPACING_TOL)
    }

    pub fn with_spacing_tol(x: &'a [f64], y: &[f64], spacing_tol: f64) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        let grid  = validate(Algorithm::Gauss, x, spacing_tol)?;
        let table = ForwardTable::build(y)?;
        Ok(Self { x, h: grid.h, mid: (grid.n - 1) / 2, table })
    }
}

impl Interpolator for Gauss<'_> {
    fn algorithm(&self) -> Algorithm { Algorithm::Gauss }

    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let x_mid = self.x[self.mid];
        let t = (xq - x_mid) / self.h;

        let value = if xq >= x_mid {
            forward_sum(&self.table, self.mid, t)
        } else {
            backward_sum(&self.table, self.mid, t)
        };
        ensure_finite(Algorithm::Gauss, xq, value)
    }
}


/// Performs Gauss central-difference interpolation.
///
/// # Errors
/// - Input errors from [`CommonCfg::validate`]
/// - [`InterpolationError::NonUniformSpacing`] on an irregular grid
pub fn interpolate(cfg: GaussCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let evals = cfg.common.x_eval();

    let interpolant = Gauss::with_spacing_tol(x, cfg.common.y(), cfg.common.spacing_tol())?;

    let mut report = InterpolationReport::new(Algorithm::Gauss, x.len(), evals.len());
    report.evaluated = interpolant.eval_many(evals)?;
    Ok(report)
}
