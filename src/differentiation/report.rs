//! Defines the [`DerivativeReport`] struct returned by all
//! differentiation algorithms.

use crate::differentiation::algorithms::Algorithm;

/// Summary of a differentiation run.
///
/// [`DerivativeReport`]
/// - `algorithm_name` : method name (e.g. `"approximation5"`)
/// - `n_provided`     : number of table nodes
/// - `x`              : evaluation points, in the order given
/// - `fd`             : derivative estimates, `fd[k]` at `x[k]`
///
/// A run either yields a value for every point or fails as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub x: Vec<f64>,
    pub fd: Vec<f64>,
}

impl DerivativeReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, x: &[f64], fd: Vec<f64>) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            x: x.to_vec(),
            fd,
        }
    }

    pub fn n_evaluated(&self) -> usize {
        self.x.len()
    }
}
