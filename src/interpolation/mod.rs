pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod traits;
pub use traits::Interpolator;

pub mod points;
pub mod tables;
pub mod validation;

pub mod lagrange;
pub mod newton;
pub mod newton_finite;
pub mod gauss;
pub mod stirling;
pub mod bessel;
