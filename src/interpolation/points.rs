//! Interpolation nodes.
//!
//! [`Point`] is a single `(x, y)` sample. [`PointSeq`] is the normalized form
//! every algorithm consumes: sorted ascending by `x`, pairwise-distinct `x`,
//! finite values, at least two nodes. Abscissae and ordinates are stored as
//! separate columns so algorithm configs can borrow them as slices.

use crate::interpolation::config::{check_abscissae, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}


#[derive(Debug, Clone, PartialEq)]
pub struct PointSeq {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PointSeq {
    /// Sorts `points` by `x` and validates the result.
    ///
    /// # Errors
    /// - [`InterpolationError::NonFiniteVec`] on NaN/inf in either coordinate
    /// - [`InterpolationError::InsufficientPoints`] below two nodes
    /// - [`InterpolationError::DuplicateX`] when two nodes share an `x`
    pub fn new<I, P>(points: I) -> Result<Self, InterpolationError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let mut pts: Vec<Point> = points.into_iter().map(Into::into).collect();

        if pts.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        // reject NaN before sorting, total_cmp would order it silently
        if let Some(idx) = pts.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        pts.sort_by(|a, b| a.x.total_cmp(&b.x));

        let x: Vec<f64> = pts.iter().map(|p| p.x).collect();
        let y: Vec<f64> = pts.iter().map(|p| p.y).collect();

        check_abscissae(&x, DEFAULT_X_TOL)?;

        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }
    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    pub fn first(&self) -> Point { Point::new(self.x[0], self.y[0]) }
    pub fn last(&self) -> Point {
        let n = self.len() - 1;
        Point::new(self.x[n], self.y[n])
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| Point::new(x, y))
    }

    pub fn to_points(&self) -> Vec<Point> {
        self.iter().collect()
    }
}
