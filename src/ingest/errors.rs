//! Ingestion error types.
//!
//! Every [`IngestError`] is a data error: the raw input could not be turned
//! into a point sequence, so no method runs.

use std::path::PathBuf;
use thiserror::Error;

use crate::interpolation::errors::{ErrorKind, InterpolationError};


#[derive(Debug, Error)]
pub enum IngestError {
    #[error("cannot read {}: {source}", path.display())]
    Io { path: PathBuf, #[source] source: std::io::Error },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}, column {column}: `{value}` is not a number")]
    NotANumber { line: u64, column: usize, value: String },

    #[error("unknown function `{name}`, expected one of: {expected}")]
    UnknownFunction { name: String, expected: String },

    #[error("invalid interval [{left}, {right}]: bounds must be finite with left < right")]
    InvalidInterval { left: f64, right: f64 },

    #[error("invalid sample count {got}: need at least 2")]
    InvalidSampleCount { got: usize },

    #[error("too many points: got {got}, at most {max} supported")]
    TooManyPoints { got: usize, max: usize },

    #[error(transparent)]
    Points(#[from] InterpolationError),
}

impl IngestError {
    pub fn kind(&self) -> ErrorKind { ErrorKind::Data }
}
