//! `interpolation5` vs. `approximation5` on the same table and points.
//!
//! Each method runs independently and its outcome is kept as a `Result`.
//! A failed method leaves `None` in its column for every row instead of
//! aborting the comparison.


use crate::differentiation::{differentiate_with_cfg, Algorithm, DerivativeReport, DifferentiationCfg};
use crate::errors::TabulaError;
use crate::summary::stats::mean_max;
use crate::tabular::TabularFunction;


/// One evaluation point of [`DifferentiationSummary`].
///
/// `abs_diff` is present only when both methods produced a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifferentiationRow {
    pub x: f64,
    pub interpolation5: Option<f64>,
    pub approximation5: Option<f64>,
    pub abs_diff: Option<f64>,
}


/// Row-wise comparison of the two derivative methods.
///
/// - `rows`                 : one [`DifferentiationRow`] per point, in input order
/// - `mean_abs_diff`        : mean over rows with both values, `None` if there are none
/// - `max_abs_diff`         : max over rows with both values, `None` if there are none
/// - `interpolation5_error` : why `interpolation5` produced no values, if it failed
/// - `approximation5_error` : why `approximation5` produced no values, if it failed
#[derive(Debug, Clone, PartialEq)]
pub struct DifferentiationSummary {
    pub rows: Vec<DifferentiationRow>,
    pub mean_abs_diff: Option<f64>,
    pub max_abs_diff: Option<f64>,
    pub interpolation5_error: Option<TabulaError>,
    pub approximation5_error: Option<TabulaError>,
}


/// Runs both derivative methods with default tolerances and compares them.
pub fn build_differentiation_methods_summary(
    table: &TabularFunction,
    xs: &[f64],
) -> DifferentiationSummary {
    build_differentiation_methods_summary_with_cfg(table, xs, &DifferentiationCfg::new())
}


/// Runs both derivative methods with tolerances `cfg` and compares them.
pub fn build_differentiation_methods_summary_with_cfg(
    table: &TabularFunction,
    xs: &[f64],
    cfg: &DifferentiationCfg,
) -> DifferentiationSummary {
    let run = |algorithm: Algorithm| split(algorithm, differentiate_with_cfg(algorithm, table, xs, cfg));
    let (interp, interp_err) = run(Algorithm::Interpolation5);
    let (approx, approx_err) = run(Algorithm::Approximation5);

    let rows: Vec<DifferentiationRow> = xs
        .iter()
        .enumerate()
        .map(|(k, &x)| {
            let i5 = interp.as_ref().map(|r| r.fd[k]);
            let a5 = approx.as_ref().map(|r| r.fd[k]);
            let abs_diff = match (i5, a5) {
                (Some(a), Some(b)) => Some((a - b).abs()),
                _ => None,
            };
            DifferentiationRow { x, interpolation5: i5, approximation5: a5, abs_diff }
        })
        .collect();

    let diffs: Vec<f64> = rows.iter().filter_map(|r| r.abs_diff).collect();
    let (mean_abs_diff, max_abs_diff) = match mean_max(&diffs) {
        Some((mean, max)) => (Some(mean), Some(max)),
        None => (None, None),
    };

    tracing::debug!(n_rows = rows.len(), n_compared = diffs.len(), "differentiation summary");

    DifferentiationSummary {
        rows,
        mean_abs_diff,
        max_abs_diff,
        interpolation5_error: interp_err,
        approximation5_error: approx_err,
    }
}


fn split(
    algorithm: Algorithm,
    outcome: Result<DerivativeReport, TabulaError>,
) -> (Option<DerivativeReport>, Option<TabulaError>) {
    match outcome {
        Ok(report) => (Some(report), None),
        Err(err) => {
            tracing::warn!(method = algorithm.algorithm_name(), error = %err, "method unavailable for summary");
            (None, Some(err))
        }
    }
}
