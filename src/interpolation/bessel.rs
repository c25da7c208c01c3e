//! Bessel Central-Difference Interpolation
//!
//! Centered half-way between the two middle nodes `m = n/2 - 1` and `m + 1`
//! of an even number of uniformly spaced nodes, `t = (x - x_m) / h`:
//!
//! ```text
//! P = (y_m + y_{m+1})/2 + (t - ½) Δy_m
//!   + t(t-1)/2!         · (Δ²y_{m-1} + Δ²y_m)/2
//!   + (t-½)t(t-1)/3!    · Δ³y_{m-1}
//!   + (t+1)t(t-1)(t-2)/4! · (Δ⁴y_{m-2} + Δ⁴y_{m-1})/2
//!   + ...
//! ```
//!
//! Even orders `2r` average the entries `m-r` and `m-r+1`, odd orders `2r+1`
//! read the single entry `m-r`. Coefficients are updated in place:
//! even by `(t+r)(t-r-1) / ((2r+2)(2r+1))`, odd by `(t+r)(t-r-1) / ((2r+3)(2r+2))`.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg, DEFAULT_SPACING_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::tables::ForwardTable;
use crate::interpolation::traits::Interpolator;
use crate::interpolation::validation::{ensure_finite, validate};


/// Bessel interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// Requires an even number of nodes.
#[derive(Debug, Clone, Copy)]
pub struct BesselCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> BesselCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(BesselCfg<'a>);


#[derive(Debug, Clone)]
pub struct Bessel<'a> {
    x: &'a [f64],
    h: f64,
    m: usize,
    table: ForwardTable,
}

impl<'a> Bessel<'a> {
    pub fn new(x: &'a [f64], y: &[f64]) -> Result<Self, InterpolationError> {
        Self::with_spacing_tol(x, y, DEFAULT_SPACING_TOL)
    }

    /// # Errors
    /// - [`InterpolationError::ParityMismatch`] on an odd node count
    /// - [`InterpolationError::NonUniformSpacing`] on an irregular grid
    pub fn with_spacing_tol(x: &'a [f64], y: &[f64], spacing_tol: f64) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        let grid  = validate(Algorithm::Bessel, x, spacing_tol)?;
        let table = ForwardTable::build(y)?;
        Ok(Self { x, h: grid.h, m: grid.n / 2 - 1, table })
    }
}

impl Interpolator for Bessel<'_> {
    fn algorithm(&self) -> Algorithm { Algorithm::Bessel }

    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let table = &self.table;
        let depth = table.depth();
        let m = self.m;
        let t = (xq - self.x[m]) / self.h;

        let y = table.row(0);
        let mut result = 0.5 * (y[m] + y[m + 1]) + (t - 0.5) * table.row(1)[m];

        let mut term_even = t * (t - 1.0) / 2.0;
        let mut term_odd  = (t - 0.5) * t * (t - 1.0) / 6.0;

        let mut r = 1usize;
        loop {
            let k_even = 2 * r;
            let k_odd  = k_even + 1;

            // symmetric window m-r .. m-r+1
            if k_even < depth && r <= m {
                let left = m - r;
                if let (Some(a), Some(b)) = (table.get(k_even, left), table.get(k_even, left + 1)) {
                    result += term_even * 0.5 * (a + b);
                }
            }
            if k_odd < depth && r <= m {
                if let Some(d) = table.get(k_odd, m - r) {
                    result += term_odd * d;
                }
            }

            if k_even >= depth && k_odd >= depth { break; }
            if r + 1 > m { break; }

            let rf = r as f64;
            let step = (t + rf) * (t - rf - 1.0);
            term_even *= step / ((2.0 * rf + 2.0) * (2.0 * rf + 1.0));
            term_odd  *= step / ((2.0 * rf + 3.0) * (2.0 * rf + 2.0));
            r += 1;
        }

        ensure_finite(Algorithm::Bessel, xq, result)
    }
}


/// Performs Bessel interpolation.
///
/// # Errors
/// - Input errors from [`CommonCfg::validate`]
/// - [`InterpolationError::ParityMismatch`] on an odd node count
/// - [`InterpolationError::NonUniformSpacing`] on an irregular grid
pub fn interpolate(cfg: BesselCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let evals = cfg.common.x_eval();

    let interpolant = Bessel::with_spacing_tol(x, cfg.common.y(), cfg.common.spacing_tol())?;

    let mut report = InterpolationReport::new(Algorithm::Bessel, x.len(), evals.len());
    report.evaluated = interpolant.eval_many(evals)?;
    Ok(report)
}
