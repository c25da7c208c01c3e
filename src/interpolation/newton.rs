//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are the top row of the [`DividedTable`] and the polynomial
//! is evaluated at query points using Horner’s scheme for numerical stability.
//! Same polynomial as [`crate::interpolation::lagrange`], no spacing requirement.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::tables::DividedTable;
use crate::interpolation::traits::Interpolator;
use crate::interpolation::validation::{check_count, ensure_finite};


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - Minimum allowed `x` spacing between consecutive nodes;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
#[derive(Debug, Clone, Copy)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Newton divided-difference interpolant.
///
/// Holds the nodes and the divided-difference table built from them, so
/// `c = table.coefficients()` satisfies
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
#[derive(Debug, Clone)]
pub struct Newton<'a> {
    x: &'a [f64],
    table: DividedTable,
}

impl<'a> Newton<'a> {
    pub fn new(x: &'a [f64], y: &[f64]) -> Result<Self, InterpolationError> {
        check_count(x.len())?;
        let table = DividedTable::build(x, y)?;
        Ok(Self { x, table })
    }

    pub fn table(&self) -> &DividedTable { &self.table }
}

impl Interpolator for Newton<'_> {
    fn algorithm(&self) -> Algorithm { Algorithm::NewtonDivided }

    /// ```text
    /// P(xq) = c[0] + (xq - x[0]) * [ c[1] + (xq - x[1]) * [ ... c[n-1] ... ] ]
    /// ```
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let coeffs = self.table.coefficients();
        let n = coeffs.len();

        let mut p = coeffs[n - 1];
        for j in (0..n - 1).rev() {
            p = coeffs[j] + (xq - self.x[j]) * p;
        }

        ensure_finite(Algorithm::NewtonDivided, xq, p)
    }
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Constructs the divided-difference table to obtain coefficients `c[i]`.
/// - For each evaluation point `xq` in `cfg.common.x_eval()`,
///   evaluates the polynomial using Horner’s nested form.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton_divided"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - Input errors from [`CommonCfg::validate`]
/// - [`InterpolationError::ZeroDenominator`] on repeated abscissae
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    let n_provided  = x.len();
    let n_evaluated = evals.len();

    let mut report = InterpolationReport::new(
        Algorithm::NewtonDivided,
        n_provided,
        n_evaluated,
    );

    let interpolant = Newton::new(x, y)?;
    report.evaluated = interpolant.eval_many(evals)?;

    Ok(report)
}
