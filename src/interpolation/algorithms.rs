//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! together with the node requirements each one places on its input.

use std::str::FromStr;


/// Interpolation algorithm variants.
/// - [`Algorithm::Lagrange`]      Lagrange basis polynomials
/// - [`Algorithm::NewtonDivided`] Newton form over divided differences
/// - [`Algorithm::NewtonFinite`]  Newton forward/backward finite differences
/// - [`Algorithm::Gauss`]         Gauss forward/backward central differences
/// - [`Algorithm::Stirling`]      mean of the two Gauss formulas, odd node count
/// - [`Algorithm::Bessel`]        half-way central formula, even node count
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Lagrange,
    NewtonDivided,
    NewtonFinite,
    Gauss,
    Stirling,
    Bessel,
}

/// Required parity of the node count.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub const fn admits(self, n: usize) -> bool {
        match self {
            Parity::Odd  => n % 2 == 1,
            Parity::Even => n % 2 == 0,
        }
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parity::Odd  => write!(f, "odd"),
            Parity::Even => write!(f, "even"),
        }
    }
}


impl Algorithm {
    /// Every method in canonical order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Lagrange,
        Algorithm::NewtonDivided,
        Algorithm::NewtonFinite,
        Algorithm::Gauss,
        Algorithm::Stirling,
        Algorithm::Bessel,
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange      => "lagrange",
            Algorithm::NewtonDivided => "newton_divided",
            Algorithm::NewtonFinite  => "newton_finite",
            Algorithm::Gauss         => "gauss",
            Algorithm::Stirling      => "stirling",
            Algorithm::Bessel        => "bessel",
        }
    }

    /// Human-readable name handed to result reporters.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::Lagrange      => "Lagrange",
            Algorithm::NewtonDivided => "Newton (divided)",
            Algorithm::NewtonFinite  => "Newton (finite)",
            Algorithm::Gauss         => "Gauss",
            Algorithm::Stirling      => "Stirling",
            Algorithm::Bessel        => "Bessel",
        }
    }

    /// Whether the formula is only defined on a uniform grid.
    pub const fn requires_uniform_spacing(self) -> bool {
        !matches!(self, Algorithm::Lagrange | Algorithm::NewtonDivided)
    }

    pub const fn required_parity(self) -> Option<Parity> {
        match self {
            Algorithm::Stirling => Some(Parity::Odd),
            Algorithm::Bessel   => Some(Parity::Even),
            _                   => None,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

/// Unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown interpolation algorithm `{0}`")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.algorithm_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
