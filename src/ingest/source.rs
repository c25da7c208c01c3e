//! Raw input shapes and their normalization into a [`PointSeq`].
//!
//! [`DataSource`]
//! - `Table`    : explicit `(x, y)` pairs
//! - `File`     : CSV, first two columns parsed as `(x, y)`, extra columns ignored,
//!   rows with fewer than two fields skipped
//! - `Function` : [`FunctionSpec`], `N` equally spaced samples of a catalog function

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::ingest::catalog::CatalogFn;
use crate::ingest::errors::IngestError;
use crate::interpolation::points::{Point, PointSeq};


/// Largest node count the formulas are meant for.
pub const MAX_POINTS: usize = 20;


/// Uniform sampling of a catalog function over `[left, right]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FunctionSpec {
    function: CatalogFn,
    left: f64,
    right: f64,
    samples: usize,
}

impl FunctionSpec {
    /// # Errors
    /// - [`IngestError::InvalidInterval`] unless `left < right`, both finite
    /// - [`IngestError::InvalidSampleCount`] if `samples < 2`
    pub fn new(function: CatalogFn, left: f64, right: f64, samples: usize) -> Result<Self, IngestError> {
        if !left.is_finite() || !right.is_finite() || right <= left {
            return Err(IngestError::InvalidInterval { left, right });
        }
        if samples < 2 {
            return Err(IngestError::InvalidSampleCount { got: samples });
        }
        Ok(Self { function, left, right, samples })
    }

    pub fn function(&self) -> CatalogFn { self.function }
    pub fn interval(&self) -> (f64, f64) { (self.left, self.right) }
    pub fn samples(&self) -> usize { self.samples }

    pub fn sample(&self) -> Vec<Point> {
        let step = (self.right - self.left) / (self.samples - 1) as f64;
        (0..self.samples)
            .map(|i| {
                let x = self.left + i as f64 * step;
                Point::new(x, self.function.apply(x))
            })
            .collect()
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Table(Vec<Point>),
    File(PathBuf),
    Function(FunctionSpec),
}

impl DataSource {
    pub fn table<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        DataSource::Table(points.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DataSource::Table(_)    => "table",
            DataSource::File(_)     => "file",
            DataSource::Function(_) => "function",
        }
    }

    /// Produces the sorted, validated node sequence.
    ///
    /// `max_points` bounds every source alike, CSV files included.
    ///
    /// # Errors
    /// - any [`IngestError`] raised while reading or sampling
    /// - [`IngestError::TooManyPoints`] above `max_points`
    /// - [`IngestError::Points`] for fewer than two nodes, duplicate or
    ///   non-finite coordinates
    pub fn load(&self, max_points: usize) -> Result<PointSeq, IngestError> {
        let raw = match self {
            DataSource::Table(points) => points.clone(),
            DataSource::File(path)    => read_csv(path)?,
            DataSource::Function(f)   => f.sample(),
        };

        if raw.len() > max_points {
            return Err(IngestError::TooManyPoints { got: raw.len(), max: max_points });
        }

        Ok(PointSeq::new(raw)?)
    }
}


/// Reads `(x, y)` pairs from the CSV file at `path`.
pub fn read_csv(path: &Path) -> Result<Vec<Point>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_from(file)
}

/// Reads `(x, y)` pairs from CSV data without a header row.
///
/// Records with fewer than two fields are skipped.
pub fn read_csv_from<R: Read>(reader: R) -> Result<Vec<Point>, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        // rows without an (x, y) pair carry no node
        if record.len() < 2 {
            continue;
        }

        let mut coords = [0.0; 2];
        for (column, slot) in coords.iter_mut().enumerate() {
            let field = &record[column];
            *slot = field.parse::<f64>().map_err(|_| IngestError::NotANumber {
                line,
                column,
                value: field.to_string(),
            })?;
        }
        points.push(Point::new(coords[0], coords[1]));
    }

    Ok(points)
}
