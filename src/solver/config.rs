//! Configuration of a solve request.
//!
//! [`SolveCfg`] — fields
//! - `methods`         : algorithms to run, in reporting order, no repeats
//! - `x_star`          : query point
//! - `spacing_tol`     : uniform-grid tolerance handed to every method
//! - `max_points`      : upper bound on ingested nodes
//! - `precision`       : decimals in reported values
//! - `success_message` : banner sent once every method has run
//!
//! [`SolveCfg::new`] selects Newton divided differences at `x* = 0`.

use crate::ingest::source::MAX_POINTS;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::DEFAULT_SPACING_TOL;
use crate::solver::errors::SolveError;

pub const DEFAULT_PRECISION: usize = 6;
pub const MAX_PRECISION: usize = 17;
pub const DEFAULT_SUCCESS_MESSAGE: &str = "computed successfully";


#[derive(Debug, Clone)]
pub struct SolveCfg {
    methods    : Vec<Algorithm>,
    x_star     : f64,
    spacing_tol: f64,
    max_points : usize,
    precision  : usize,
    success_message: String,
}

impl Default for SolveCfg {
    fn default() -> Self { Self::new() }
}

impl SolveCfg {
    pub fn new() -> Self {
        Self {
            methods    : vec![Algorithm::NewtonDivided],
            x_star     : 0.0,
            spacing_tol: DEFAULT_SPACING_TOL,
            max_points : MAX_POINTS,
            precision  : DEFAULT_PRECISION,
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
        }
    }

    // getters
    pub fn methods(&self)     -> &[Algorithm] { &self.methods }
    pub fn x_star(&self)      -> f64 { self.x_star }
    pub fn spacing_tol(&self) -> f64 { self.spacing_tol }
    pub fn max_points(&self)  -> usize { self.max_points }
    pub fn precision(&self)   -> usize { self.precision }
    pub fn success_message(&self) -> &str { &self.success_message }

    /// Keeps the first occurrence of each algorithm.
    pub fn set_methods(mut self, v: &[Algorithm]) -> Result<Self, SolveError> {
        if v.is_empty() {
            return Err(SolveError::NoMethods);
        }
        let mut methods: Vec<Algorithm> = Vec::with_capacity(v.len());
        for &a in v {
            if !methods.contains(&a) {
                methods.push(a);
            }
        }
        self.methods = methods;
        Ok(self)
    }

    pub fn select_all(mut self) -> Self {
        self.methods = Algorithm::ALL.to_vec();
        self
    }

    pub fn set_x_star(mut self, v: f64) -> Result<Self, SolveError> {
        if !v.is_finite() {
            return Err(SolveError::NonFiniteQuery { got: v });
        }
        self.x_star = v;
        Ok(self)
    }

    pub fn set_spacing_tol(mut self, v: f64) -> Result<Self, SolveError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(SolveError::InvalidSpacingTol { got: v });
        }
        self.spacing_tol = v;
        Ok(self)
    }

    pub fn set_max_points(mut self, v: usize) -> Result<Self, SolveError> {
        if v < 2 {
            return Err(SolveError::InvalidMaxPoints { got: v });
        }
        self.max_points = v;
        Ok(self)
    }

    pub fn set_precision(mut self, v: usize) -> Result<Self, SolveError> {
        if v > MAX_PRECISION {
            return Err(SolveError::InvalidPrecision { got: v, max: MAX_PRECISION });
        }
        self.precision = v;
        Ok(self)
    }

    pub fn set_success_message(mut self, v: impl Into<String>) -> Self {
        self.success_message = v.into();
        self
    }
}
