//! Finite-Difference Differentiation (`approximation5`)
//!
//! Fourth-order 5-point formulas on a uniform grid, defined only at node
//! positions. The formula is picked by the node index `i` in an `n`-node table:
//!
//! ```text
//! i = 0        : (-25f0 + 48f1 - 36f2 + 16f3 - 3f4) / 12h
//! i = 1        : ( -3f0 - 10f1 + 18f2 -  6f3 +  f4) / 12h
//! 2 ≤ i ≤ n-3  : (f[i-2] - 8f[i-1] + 8f[i+1] - f[i+2]) / 12h
//! i = n-2      : (3f[n-1] + 10f[n-2] - 18f[n-3] +  6f[n-4] -  f[n-5]) / 12h
//! i = n-1      : (25f[n-1] - 48f[n-2] + 36f[n-3] - 16f[n-4] + 3f[n-5]) / 12h
//! ```


use crate::differentiation::config::DifferentiationCfg;
use crate::differentiation::traits::Differentiator;
use crate::errors::DataError;
use crate::tabular::grid::{approximate_step, find_nearest_index};
use crate::tabular::TabularFunction;


/// Applies the 5-point formula for node `i` of `f` with step `h`.
///
/// Requires `f.len() >= 5` and `i < f.len()`.
pub fn five_point_derivative_at_node(f: &[f64], i: usize, h: f64) -> f64 {
    let n = f.len();
    let d = 12.0 * h;

    if i == 0 {
        (-25.0 * f[0] + 48.0 * f[1] - 36.0 * f[2] + 16.0 * f[3] - 3.0 * f[4]) / d
    } else if i == 1 {
        (-3.0 * f[0] - 10.0 * f[1] + 18.0 * f[2] - 6.0 * f[3] + f[4]) / d
    } else if i <= n - 3 {
        (f[i - 2] - 8.0 * f[i - 1] + 8.0 * f[i + 1] - f[i + 2]) / d
    } else if i == n - 2 {
        (3.0 * f[n - 1] + 10.0 * f[n - 2] - 18.0 * f[n - 3] + 6.0 * f[n - 4] - f[n - 5]) / d
    } else {
        (25.0 * f[n - 1] - 48.0 * f[n - 2] + 36.0 * f[n - 3] - 16.0 * f[n - 4] + 3.0 * f[n - 5]) / d
    }
}


/// `approximation5` estimator.
///
/// # Fields
/// - `table`    : validated table of at least 5 nodes
/// - `h`        : uniform grid step
/// - `node_tol` : max distance from a point to its node, `|h| * node_tol_factor`
#[derive(Debug, Clone, Copy)]
pub struct FiniteDifference<'a> {
    table: TabularFunction<'a>,
    h: f64,
    node_tol: f64,
}

impl<'a> FiniteDifference<'a> {
    /// Resolves the grid step of `table`.
    ///
    /// # Errors
    /// - [`DataError::NonUniformGrid`] if any spacing deviates from the mean
    ///   by more than `cfg.step_tol()`
    /// - [`DataError::InvalidStep`] if the step is zero or non-finite
    pub fn new(table: TabularFunction<'a>, cfg: &DifferentiationCfg) -> Result<Self, DataError> {
        let h = approximate_step(table.x(), cfg.step_tol())
            .ok_or(DataError::NonUniformGrid { tol: cfg.step_tol() })?;
        if h == 0.0 || !h.is_finite() {
            return Err(DataError::InvalidStep { h });
        }

        let node_tol = h.abs() * cfg.node_tol_factor();
        tracing::trace!(h, node_tol, "uniform grid step resolved");

        Ok(Self { table, h, node_tol })
    }

    pub fn step(&self) -> f64 { self.h }
    pub fn node_tol(&self) -> f64 { self.node_tol }
}

impl Differentiator for FiniteDifference<'_> {
    fn derivative(&self, x: f64) -> Result<f64, DataError> {
        let nodes = self.table.x();
        let i = find_nearest_index(nodes, x)?;

        if (nodes[i] - x).abs() > self.node_tol {
            return Err(DataError::NotOnNode { got: x, nearest: nodes[i], tol: self.node_tol });
        }

        Ok(five_point_derivative_at_node(self.table.f(), i, self.h))
    }
}
