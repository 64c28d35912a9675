//! Polynomial interpolation over all nodes of a table.
//!
//! [`interpolate`] dispatches by method name, [`interpolate_with`] by
//! [`Algorithm`]. Both validate the table (at least
//! [`MIN_INTERPOLATION_POINTS`] nodes) and the points; extrapolation
//! is allowed.

pub mod algorithms;
pub mod report;
pub mod traits;
pub use algorithms::Algorithm;
pub use report::InterpolationReport;
pub use traits::Interpolator;

pub mod lagrange;
pub mod newton;


use crate::errors::TabulaError;
use crate::tabular::TabularFunction;
use crate::tabular::validation::{validate_points_to_evaluate, validate_tabular, MIN_TABLE_POINTS};
use lagrange::Lagrange;
use newton::Newton;

pub const MIN_INTERPOLATION_POINTS: usize = MIN_TABLE_POINTS;


/// Interpolates `table` at `xs` with the method named `method`
/// (`"lagrange"` or `"newton"`).
///
/// # Errors
/// - [`crate::errors::MethodError::NotSupported`] for any other name
/// - [`crate::errors::DataError`] from table or point validation
pub fn interpolate(
    method: &str,
    table: &TabularFunction,
    xs: &[f64],
) -> Result<InterpolationReport, TabulaError> {
    let algorithm: Algorithm = method.parse()?;
    interpolate_with(algorithm, table, xs)
}


/// Interpolates `table` at `xs` with `algorithm`.
pub fn interpolate_with(
    algorithm: Algorithm,
    table: &TabularFunction,
    xs: &[f64],
) -> Result<InterpolationReport, TabulaError> {
    validate_tabular(table, MIN_INTERPOLATION_POINTS)?;
    validate_points_to_evaluate(table, xs, false)?;

    tracing::debug!(
        method = algorithm.algorithm_name(),
        n_provided = table.len(),
        n_evaluated = xs.len(),
        "interpolating"
    );

    let values = match algorithm {
        Algorithm::Lagrange => Lagrange::new(*table).eval_many(xs),
        Algorithm::Newton   => Newton::new(*table).eval_many(xs),
    };

    Ok(InterpolationReport::new(algorithm, table.len(), xs, values))
}
