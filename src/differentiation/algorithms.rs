//! Differentiation algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the fixed stencil size they share.

use std::str::FromStr;
use crate::errors::MethodError;


/// Both derivative methods read exactly this many nodes per point.
pub const STENCIL_POINTS: usize = crate::tabular::grid::STENCIL_SIZE;


/// Differentiation algorithm variants.
/// - [`Algorithm::Interpolation5`] derivative of the local 5-node Lagrange polynomial
/// - [`Algorithm::Approximation5`] fourth-order finite differences on a uniform grid
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Interpolation5,
    Approximation5,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Interpolation5, Algorithm::Approximation5];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Interpolation5 => "interpolation5",
            Algorithm::Approximation5 => "approximation5",
        }
    }

    /// Minimum number of table nodes the method accepts.
    pub const fn min_points(self) -> usize {
        match self {
            Algorithm::Interpolation5
            | Algorithm::Approximation5 => STENCIL_POINTS,
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

impl FromStr for Algorithm {
    type Err = MethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.algorithm_name() == s)
            .ok_or_else(|| MethodError::NotSupported {
                method: s.to_owned(),
                expected: "`interpolation5`, `approximation5`",
            })
    }
}
