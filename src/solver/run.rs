//! Solve request: ingest, tabulate, evaluate every selected method, report.
//!
//! An ingestion failure is reported once and aborts the request. A method
//! failure is reported and the next method runs; the difference table and
//! earlier results stay reported.

use tracing::{debug, info, warn};

use crate::ingest::source::DataSource;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::bessel::Bessel;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::gauss::Gauss;
use crate::interpolation::lagrange::Lagrange;
use crate::interpolation::newton::Newton;
use crate::interpolation::newton_finite::NewtonFinite;
use crate::interpolation::points::PointSeq;
use crate::interpolation::stirling::Stirling;
use crate::interpolation::tables::ForwardTable;
use crate::interpolation::traits::Interpolator;
use crate::solver::config::SolveCfg;
use crate::solver::errors::SolveError;
use crate::solver::reporter::Reporter;


/// Outcome of one method in a solve request.
#[derive(Debug)]
pub struct MethodOutcome {
    pub algorithm: Algorithm,
    pub result: Result<f64, InterpolationError>,
}

/// Everything a solve request produced.
#[derive(Debug)]
pub struct SolveSummary {
    pub points: PointSeq,
    pub table: ForwardTable,
    pub outcomes: Vec<MethodOutcome>,
}

impl SolveSummary {
    pub fn value(&self, algorithm: Algorithm) -> Option<f64> {
        self.outcomes
            .iter()
            .find(|o| o.algorithm == algorithm)
            .and_then(|o| o.result.as_ref().ok().copied())
    }

    pub fn n_failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }
}


/// Validates the nodes for `algorithm` and prepares its interpolant.
pub fn build_interpolant<'a>(
    algorithm  : Algorithm,
    points     : &'a PointSeq,
    spacing_tol: f64,
) -> Result<Box<dyn Interpolator + 'a>, InterpolationError> {
    let (x, y) = (points.x(), points.y());
    let interpolant: Box<dyn Interpolator + 'a> = match algorithm {
        Algorithm::Lagrange      => Box::new(Lagrange::new(x, y)?),
        Algorithm::NewtonDivided => Box::new(Newton::new(x, y)?),
        Algorithm::NewtonFinite  => Box::new(NewtonFinite::with_spacing_tol(x, y, spacing_tol)?),
        Algorithm::Gauss         => Box::new(Gauss::with_spacing_tol(x, y, spacing_tol)?),
        Algorithm::Stirling      => Box::new(Stirling::with_spacing_tol(x, y, spacing_tol)?),
        Algorithm::Bessel        => Box::new(Bessel::with_spacing_tol(x, y, spacing_tol)?),
    };
    Ok(interpolant)
}

/// Single evaluation of `algorithm` at `x`.
pub fn evaluate(
    algorithm  : Algorithm,
    points     : &PointSeq,
    x          : f64,
    spacing_tol: f64,
) -> Result<f64, InterpolationError> {
    build_interpolant(algorithm, points, spacing_tol)?.eval(x)
}

/// Samples the interpolant of `algorithm` at `samples` equally spaced points
/// across `[x_0, x_{n-1}]`, for plotting.
pub fn sample_curve(
    algorithm  : Algorithm,
    points     : &PointSeq,
    samples    : usize,
    spacing_tol: f64,
) -> Result<(Vec<f64>, Vec<f64>), InterpolationError> {
    let interpolant = build_interpolant(algorithm, points, spacing_tol)?;

    let (x_min, x_max) = (points.first().x, points.last().x);
    let xs: Vec<f64> = match samples {
        0 => Vec::new(),
        1 => vec![x_min],
        _ => {
            let step = (x_max - x_min) / (samples - 1) as f64;
            (0..samples).map(|i| x_min + i as f64 * step).collect()
        }
    };
    let ys = interpolant.eval_many(&xs)?;
    Ok((xs, ys))
}


/// Runs a full solve request against `reporter`.
///
/// # Errors
/// - [`SolveError::Ingest`] if `source` cannot be turned into nodes; the
///   failure has already been reported through `reporter`.
///
/// Per-method failures are not errors of the request; they are reported
/// and recorded in [`SolveSummary::outcomes`].
pub fn solve(
    source  : &DataSource,
    cfg     : &SolveCfg,
    reporter: &mut dyn Reporter,
) -> Result<SolveSummary, SolveError> {
    reporter.clear_difference_table();
    reporter.clear_results();

    let points = match source.load(cfg.max_points()) {
        Ok(points) => points,
        Err(e) => {
            let err = SolveError::from(e);
            warn!(source = source.kind(), error = %err, "ingestion failed");
            reporter.report_error(&err.to_string());
            return Err(err);
        }
    };
    debug!(source = source.kind(), n = points.len(), "nodes loaded");

    let table = ForwardTable::from_points(&points);
    reporter.report_difference_table(&table);

    let x_star    = cfg.x_star();
    let precision = cfg.precision();

    let mut outcomes = Vec::with_capacity(cfg.methods().len());
    for &algorithm in cfg.methods() {
        let result = evaluate(algorithm, &points, x_star, cfg.spacing_tol());
        match &result {
            Ok(value) => {
                debug!(%algorithm, x_star, value, "method evaluated");
                reporter.report_result(algorithm.label(), &format!("{value:.precision$}"));
            }
            Err(e) => {
                warn!(%algorithm, kind = ?e.kind(), error = %e, "method failed");
                reporter.report_error(&format!("{}: {e}", algorithm.label()));
            }
        }
        outcomes.push(MethodOutcome { algorithm, result });
    }

    reporter.render_plot(&points, x_star);
    reporter.report_ok(cfg.success_message());

    let summary = SolveSummary { points, table, outcomes };
    info!(
        methods = summary.outcomes.len(),
        failed  = summary.n_failed(),
        x_star,
        "solve finished"
    );
    Ok(summary)
}
