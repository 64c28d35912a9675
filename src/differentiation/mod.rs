//! First derivatives of tabulated functions from 5-node stencils.
//!
//! Both methods need at least [`STENCIL_POINTS`] nodes and refuse points
//! outside the node span.
//!
//! [`differentiate`] dispatches by method name; [`differentiate_with_cfg`]
//! takes an [`Algorithm`] and explicit tolerances.

pub mod algorithms;
pub mod config;
pub mod report;
pub mod traits;
pub use algorithms::{Algorithm, STENCIL_POINTS};
pub use config::DifferentiationCfg;
pub use report::DerivativeReport;
pub use traits::Differentiator;

pub mod finite_difference;
pub mod local_lagrange;


use crate::errors::TabulaError;
use crate::tabular::TabularFunction;
use crate::tabular::validation::{
    validate_min_points_for_method,
    validate_points_to_evaluate,
    validate_tabular,
    MIN_TABLE_POINTS,
};
use finite_difference::FiniteDifference;
use local_lagrange::LocalLagrange;


/// Differentiates `table` at `xs` with the method named `method`
/// (`"interpolation5"` or `"approximation5"`), using default tolerances.
///
/// # Errors
/// - [`crate::errors::MethodError::NotSupported`] for any other name
/// - [`crate::errors::DataError`] from validation or the method itself
pub fn differentiate(
    method: &str,
    table: &TabularFunction,
    xs: &[f64],
) -> Result<DerivativeReport, TabulaError> {
    let algorithm: Algorithm = method.parse()?;
    differentiate_with_cfg(algorithm, table, xs, &DifferentiationCfg::new())
}


/// Differentiates `table` at `xs` with `algorithm` and tolerances `cfg`.
pub fn differentiate_with_cfg(
    algorithm: Algorithm,
    table: &TabularFunction,
    xs: &[f64],
    cfg: &DifferentiationCfg,
) -> Result<DerivativeReport, TabulaError> {
    validate_tabular(table, MIN_TABLE_POINTS)?;
    validate_min_points_for_method(table, algorithm.min_points(), algorithm.algorithm_name())?;
    validate_points_to_evaluate(table, xs, true)?;

    tracing::debug!(
        method = algorithm.algorithm_name(),
        n_provided = table.len(),
        n_evaluated = xs.len(),
        "differentiating"
    );

    let values = match algorithm {
        Algorithm::Interpolation5 => LocalLagrange::new(*table).derivative_many(xs)?,
        Algorithm::Approximation5 => FiniteDifference::new(*table, cfg)?.derivative_many(xs)?,
    };

    Ok(DerivativeReport::new(algorithm, table.len(), xs, values))
}
