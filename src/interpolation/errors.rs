//! Interpolation error types.
//!
//! ┌ Data         : malformed input (lengths, duplicates, ordering, counts)
//! ├ Precondition : input valid but a formula cannot run on it
//! │   ├ non-uniform node spacing
//! │   └ wrong node-count parity (Stirling / Bessel)
//! └ Computation  : arithmetic failure inside a formula
//!
//! [`InterpolationError::kind`] maps every variant onto [`ErrorKind`].

use thiserror::Error;
use super::algorithms::{Algorithm, Parity};


/// Coarse classification of a failure.
///
/// - [`ErrorKind::Data`]         aborts a whole solve request
/// - [`ErrorKind::Precondition`] local to one method
/// - [`ErrorKind::Computation`]  local to one method
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Data,
    Precondition,
    Computation,
}


#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("invalid spacing_tol {got} must be finite and > 0")]
    InvalidSpacingTol { got: f64 },

    #[error("nodes are not uniformly spaced: gap {idx} is {got}, expected {expected}")]
    NonUniformSpacing { idx: usize, expected: f64, got: f64 },

    #[error("{algorithm} requires an {required} number of nodes, got {got}")]
    ParityMismatch { algorithm: Algorithm, got: usize, required: Parity },

    #[error("zero denominator between nodes x={x1} and x={x2}")]
    ZeroDenominator { x1: f64, x2: f64 },

    #[error("{algorithm} produced a non-finite value at x={x}")]
    NonFiniteResult { algorithm: Algorithm, x: f64 },
}

impl InterpolationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InterpolationError::UnequalLength { .. }
            | InterpolationError::NonFiniteVec { .. }
            | InterpolationError::EmptyInput
            | InterpolationError::InsufficientPoints { .. }
            | InterpolationError::DuplicateX { .. }
            | InterpolationError::NonIncreasingX
            | InterpolationError::InvalidXTol { .. }
            | InterpolationError::InvalidSpacingTol { .. } => ErrorKind::Data,

            InterpolationError::NonUniformSpacing { .. }
            | InterpolationError::ParityMismatch { .. } => ErrorKind::Precondition,

            InterpolationError::ZeroDenominator { .. }
            | InterpolationError::NonFiniteResult { .. } => ErrorKind::Computation,
        }
    }
}
