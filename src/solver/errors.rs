use thiserror::Error;

use crate::ingest::errors::IngestError;

/// Solve-request errors.
///
/// ┌ misconfigured request (rejected by [`crate::solver::config::SolveCfg`] setters)
/// └ ingestion failure, which aborts the request before any method runs
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("no interpolation method selected")]
    NoMethods,

    #[error("query point must be finite, got {got}")]
    NonFiniteQuery { got: f64 },

    #[error("invalid spacing_tol {got} must be finite and > 0")]
    InvalidSpacingTol { got: f64 },

    #[error("invalid max_points {got}: must be >= 2")]
    InvalidMaxPoints { got: usize },

    #[error("invalid precision {got}: must be <= {max}")]
    InvalidPrecision { got: usize, max: usize },

    #[error("data preparation failed: {0}")]
    Ingest(#[from] IngestError),
}
