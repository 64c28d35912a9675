//! Local Lagrange Differentiation (`interpolation5`)
//!
//! For each point a 5-node stencil is chosen around the nearest node
//! (see [`five_point_stencil`]) and the degree-4 Lagrange polynomial through
//! it is differentiated analytically with the product rule:
//!
//! ```text
//! L'(p) = Σ_i f[i] Σ_{m≠i} [ 1/(x[i]-x[m]) · Π_{j≠i,m} (p-x[j])/(x[i]-x[j]) ]
//! ```
//!
//! Exact (up to rounding) for polynomials of degree ≤ 4.


use crate::differentiation::traits::Differentiator;
use crate::errors::DataError;
use crate::tabular::grid::five_point_stencil;
use crate::tabular::TabularFunction;


/// Derivative at `point` of the Lagrange polynomial through `(x, f)`.
///
/// O(n³) in the number of nodes; callers pass a 5-node stencil.
pub fn lagrange_derivative_at_point(x: &[f64], f: &[f64], point: f64) -> f64 {
    let n = x.len();
    let mut sum = 0.0;

    for i in 0..n {
        let mut d_basis = 0.0;
        for m in 0..n {
            if m == i {
                continue;
            }
            let mut term = 1.0 / (x[i] - x[m]);
            for j in 0..n {
                if j != i && j != m {
                    term *= (point - x[j]) / (x[i] - x[j]);
                }
            }
            d_basis += term;
        }
        sum += f[i] * d_basis;
    }

    sum
}


/// `interpolation5` estimator over a validated table of at least 5 nodes.
#[derive(Debug, Clone, Copy)]
pub struct LocalLagrange<'a> {
    table: TabularFunction<'a>,
}

impl<'a> LocalLagrange<'a> {
    pub fn new(table: TabularFunction<'a>) -> Self {
        Self { table }
    }
}

impl Differentiator for LocalLagrange<'_> {
    fn derivative(&self, x: f64) -> Result<f64, DataError> {
        let idx = five_point_stencil(&self.table, x)?;

        let xs = idx.map(|i| self.table.x()[i]);
        let fs = idx.map(|i| self.table.f()[i]);

        Ok(lagrange_derivative_at_point(&xs, &fs, x))
    }
}
