//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! and parses the method names accepted by [`crate::interpolation::interpolate`].

use std::str::FromStr;
use crate::errors::MethodError;

/// Interpolation algorithm variants.
/// - [`Algorithm::Lagrange`] direct evaluation of the Lagrange form
/// - [`Algorithm::Newton`]   divided differences with nested evaluation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Lagrange,
    Newton,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Lagrange, Algorithm::Newton];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange => "lagrange",
            Algorithm::Newton   => "newton",
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
                expected: "`lagrange`, `newton`",
            })
    }
}
