//! Defines the struct returned by all interpolation algorithms.
//!
//! This report summarizes the interpolation run: the algorithm used,
//! number of nodes, the echoed evaluation points and the values computed
//! at each of them.

use crate::interpolation::algorithms::Algorithm;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"lagrange"`)
/// - `n_provided`     : number of input nodes `(x, f)`
/// - `x`              : evaluation points, in the order given
/// - `f`              : interpolated values, `f[k]` at `x[k]`
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub x: Vec<f64>,
    pub f: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, x: &[f64], f: Vec<f64>) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            x: x.to_vec(),
            f,
        }
    }

    pub fn n_evaluated(&self) -> usize {
        self.x.len()
    }
}
