//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation by direct evaluation of the
//! [Lagrange form](https://en.wikipedia.org/wiki/Lagrange_polynomial).
//!
//! ```text
//! P(xq) = Σ_i f[i] · L_i(xq),   L_i(xq) = Π_{j≠i} (xq - x[j]) / (x[i] - x[j])
//! ```
//!
//! Each evaluation costs O(n²); nothing is precomputed.


use crate::interpolation::traits::Interpolator;
use crate::tabular::TabularFunction;


/// Evaluates the Lagrange polynomial through `(x, f)` at `point`.
///
/// Exact (up to rounding) for polynomials of degree `< x.len()`.
/// Points outside the node span are extrapolated.
pub fn lagrange_at_point(x: &[f64], f: &[f64], point: f64) -> f64 {
    let n = x.len();
    let mut sum = 0.0;

    for i in 0..n {
        let mut basis = 1.0;
        for j in 0..n {
            if j != i {
                basis *= (point - x[j]) / (x[i] - x[j]);
            }
        }
        sum += f[i] * basis;
    }

    sum
}


/// Lagrange interpolant over a validated table.
#[derive(Debug, Clone, Copy)]
pub struct Lagrange<'a> {
    table: TabularFunction<'a>,
}

impl<'a> Lagrange<'a> {
    pub fn new(table: TabularFunction<'a>) -> Self {
        Self { table }
    }
}

impl Interpolator for Lagrange<'_> {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        lagrange_at_point(self.table.x(), self.table.f(), x)
    }
}
