pub mod interpolation;
pub mod ingest;
pub mod solver;
pub mod logging;
