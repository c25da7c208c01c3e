//! Difference tables.
//!
//! - [`ForwardTable`] : forward differences of the ordinates,
//!   `rows[k][i] = rows[k-1][i+1] - rows[k-1][i]`, row 0 holding `y`.
//!   Independent of the abscissae.
//! - [`DividedTable`] : Newton divided differences,
//!   `dd[i][level] = (dd[i+1][level-1] - dd[i][level-1]) / (x[i+level] - x[i])`.
//!
//! Both are triangular: forward row `k` has `n - k` entries and divided
//! row `i` has `n - i` entries.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::points::PointSeq;


#[derive(Debug, Clone, PartialEq)]
pub struct ForwardTable {
    rows: Vec<Vec<f64>>,
}

impl ForwardTable {
    /// Builds the forward-difference triangle of `y`.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if `y` is empty.
    pub fn build(y: &[f64]) -> Result<Self, InterpolationError> {
        if y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        Ok(Self::from_nonempty(y))
    }

    /// Table of a validated node sequence, which is never empty.
    pub fn from_points(points: &PointSeq) -> Self {
        Self::from_nonempty(points.y())
    }

    fn from_nonempty(y: &[f64]) -> Self {
        let n = y.len();
        let mut rows: Vec<Vec<f64>> = Vec::with_capacity(n);
        rows.push(y.to_vec());

        for k in 1..n {
            let prev = &rows[k - 1];
            let curr: Vec<f64> = prev.windows(2).map(|w| w[1] - w[0]).collect();
            rows.push(curr);
        }

        Self { rows }
    }

    /// Number of rows, equal to the number of nodes.
    pub fn depth(&self) -> usize { self.rows.len() }

    /// Differences of order `k`.
    ///
    /// # Panics
    /// If `k >= depth()`; use [`ForwardTable::get`] for a checked lookup.
    pub fn row(&self, k: usize) -> &[f64] { &self.rows[k] }

    pub fn rows(&self) -> &[Vec<f64>] { &self.rows }

    /// Entry `Δ^k y_i`, `None` when outside the triangle.
    pub fn get(&self, k: usize, i: usize) -> Option<f64> {
        self.rows.get(k).and_then(|row| row.get(i)).copied()
    }

    /// Column headers for display: `y`, `Δ^1`, ..., `Δ^{n-1}`.
    pub fn headers(&self) -> Vec<String> {
        (0..self.depth())
            .map(|k| if k == 0 { "y".to_string() } else { format!("Δ^{k}") })
            .collect()
    }

    /// Renders the table with one line per node index and one column per
    /// difference order; cells past the triangle are blank.
    pub fn render(&self, precision: usize) -> String {
        let width = precision + 8;
        let mut out = String::new();

        for h in self.headers() {
            out.push_str(&format!("{h:>width$}"));
        }
        out.push('\n');

        for i in 0..self.depth() {
            for k in 0..self.depth() {
                match self.get(k, i) {
                    Some(v) => out.push_str(&format!("{v:>width$.precision$}")),
                    None    => out.push_str(&" ".repeat(width)),
                }
            }
            out.push('\n');
        }
        out
    }
}


#[derive(Debug, Clone, PartialEq)]
pub struct DividedTable {
    dd: Vec<Vec<f64>>,
}

impl DividedTable {
    /// Builds the divided-difference triangle of `(x, y)`.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] on empty input
    /// - [`InterpolationError::UnequalLength`] if `x` and `y` disagree
    /// - [`InterpolationError::ZeroDenominator`] if two nodes share an `x`
    pub fn build(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }

        let n = x.len();
        let mut dd: Vec<Vec<f64>> = y.iter().map(|&yi| {
            let mut row = Vec::with_capacity(n);
            row.push(yi);
            row
        }).collect();

        for level in 1..n {
            for i in 0..n - level {
                let denom = x[i + level] - x[i];
                if denom == 0.0 {
                    return Err(InterpolationError::ZeroDenominator { x1: x[i], x2: x[i + level] });
                }
                let v = (dd[i + 1][level - 1] - dd[i][level - 1]) / denom;
                dd[i].push(v);
            }
        }

        Ok(Self { dd })
    }

    pub fn len(&self) -> usize { self.dd.len() }
    pub fn is_empty(&self) -> bool { self.dd.is_empty() }

    /// `f[x_i, ..., x_{i+level}]`
    pub fn get(&self, i: usize, level: usize) -> Option<f64> {
        self.dd.get(i).and_then(|row| row.get(level)).copied()
    }

    /// Newton coefficients `f[x_0], f[x_0, x_1], ..., f[x_0, ..., x_{n-1}]`.
    pub fn coefficients(&self) -> &[f64] { &self.dd[0] }
}
