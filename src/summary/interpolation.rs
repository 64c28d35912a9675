//! Lagrange vs. Newton on the same table and points.
//!
//! The two forms describe the same polynomial, so the differences measure
//! rounding only. Either method failing aborts the whole summary.


use crate::errors::TabulaError;
use crate::interpolation::{interpolate_with, Algorithm};
use crate::summary::stats::mean_max;
use crate::tabular::TabularFunction;


/// One evaluation point of [`InterpolationSummary`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationRow {
    pub x: f64,
    pub lagrange: f64,
    pub newton: f64,
    pub abs_diff: f64,
}


/// Row-wise comparison of Lagrange and Newton.
///
/// - `rows`          : one [`InterpolationRow`] per point, in input order
/// - `mean_abs_diff` : mean of `abs_diff` over all rows (`0.0` with no rows)
/// - `max_abs_diff`  : max of `abs_diff` over all rows (`0.0` with no rows)
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationSummary {
    pub rows: Vec<InterpolationRow>,
    pub mean_abs_diff: f64,
    pub max_abs_diff: f64,
}


/// Runs both interpolation methods over `(table, xs)` and compares them.
///
/// # Errors
/// Propagates the first validation failure of either method.
pub fn build_interpolation_methods_summary(
    table: &TabularFunction,
    xs: &[f64],
) -> Result<InterpolationSummary, TabulaError> {
    let lagrange = interpolate_with(Algorithm::Lagrange, table, xs)?;
    let newton   = interpolate_with(Algorithm::Newton, table, xs)?;

    let rows: Vec<InterpolationRow> = xs
        .iter()
        .zip(lagrange.f.iter().zip(newton.f.iter()))
        .map(|(&x, (&l, &n))| InterpolationRow {
            x,
            lagrange: l,
            newton: n,
            abs_diff: (l - n).abs(),
        })
        .collect();

    let diffs: Vec<f64> = rows.iter().map(|r| r.abs_diff).collect();
    let (mean_abs_diff, max_abs_diff) = mean_max(&diffs).unwrap_or((0.0, 0.0));

    tracing::debug!(n_rows = rows.len(), mean_abs_diff, max_abs_diff, "interpolation summary");

    Ok(InterpolationSummary { rows, mean_abs_diff, max_abs_diff })
}
