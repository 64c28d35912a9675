//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are computed once per table by divided differences and
//! evaluated at query points using Horner's scheme. On the same nodes the
//! result equals [`crate::interpolation::lagrange`] up to rounding.


use crate::interpolation::traits::Interpolator;
use crate::tabular::TabularFunction;


/// Computes Newton divided-difference coefficients.
///
/// Returns a coefficient vector `c` s.t.
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
///
/// Works on a copy of `f`; the caller's values are left untouched.
#[inline]
pub fn divided_differences(x: &[f64], f: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut c = f.to_vec();

    for j in 1..n {
        for i in (j..n).rev() {
            c[i] = (c[i] - c[i - 1]) / (x[i] - x[i - j]);
        }
    }

    c
}


/// Evaluates the Newton form with coefficients `coeffs` at `xq`.
///
/// ```text
/// P(xq) = c[0] + (xq - x[0]) * [ c[1] + (xq - x[1]) * [ ... c[n-1] ... ] ]
/// ```
#[inline]
pub fn newton_eval(x: &[f64], coeffs: &[f64], xq: f64) -> f64 {
    let n = coeffs.len();
    if n == 0 {
        return 0.0;
    }

    let mut p = coeffs[n - 1];
    for j in (0..n - 1).rev() {
        p = coeffs[j] + (xq - x[j]) * p;
    }

    p
}


/// Newton interpolant with precomputed coefficients.
///
/// # Fields
/// - `x`      : borrowed nodes
/// - `coeffs` : divided-difference coefficients, owned
#[derive(Debug, Clone)]
pub struct Newton<'a> {
    x: &'a [f64],
    coeffs: Vec<f64>,
}

impl<'a> Newton<'a> {
    pub fn new(table: TabularFunction<'a>) -> Self {
        Self {
            x: table.x(),
            coeffs: divided_differences(table.x(), table.f()),
        }
    }

    pub fn coeffs(&self) -> &[f64] { &self.coeffs }
}

impl Interpolator for Newton<'_> {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        newton_eval(self.x, &self.coeffs, x)
    }
}
