//! Input checks for tabulated data and evaluation points.
//!
//! All checks are pure and stop at the first violation found.


use crate::errors::DataError;
use crate::tabular::TabularFunction;

/// Fewest nodes any table may have.
pub const MIN_TABLE_POINTS: usize = 2;


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}


/// Checks the structure of a table.
///
/// # Errors
/// - [`DataError::UnequalLength`] if `x` and `f` differ in length
/// - [`DataError::InsufficientPoints`] if there are fewer than `min_points` nodes
/// - [`DataError::NonFiniteNode`] / [`DataError::NonFiniteValue`] on NaN or ±∞
/// - [`DataError::NonIncreasingX`] if `x` is not strictly increasing
pub fn validate_tabular(table: &TabularFunction, min_points: usize) -> Result<(), DataError> {
    let x = table.x();
    let f = table.f();

    if x.len() != f.len() {
        return Err(DataError::UnequalLength { x_len: x.len(), f_len: f.len() });
    }
    if x.len() < min_points {
        return Err(DataError::InsufficientPoints { got: x.len(), need: min_points });
    }
    if let Some(idx) = non_finite_idx(x) {
        return Err(DataError::NonFiniteNode { idx });
    }
    if let Some(idx) = non_finite_idx(f) {
        return Err(DataError::NonFiniteValue { idx });
    }
    for i in 1..x.len() {
        if x[i] <= x[i - 1] {
            return Err(DataError::NonIncreasingX { idx: i, prev: x[i - 1], got: x[i] });
        }
    }

    Ok(())
}


/// Checks the points a method will be evaluated at.
///
/// With `require_in_range` every point must lie in `[min(x), max(x)]`;
/// otherwise extrapolation is allowed.
///
/// # Errors
/// - [`DataError::EmptyPoints`] if `xs` is empty
/// - [`DataError::NonFinitePoint`] on NaN or ±∞
/// - [`DataError::EmptyNodes`] if range checking against an empty table
/// - [`DataError::OutOfBounds`] for the first point outside the node span
pub fn validate_points_to_evaluate(
    table: &TabularFunction,
    xs: &[f64],
    require_in_range: bool,
) -> Result<(), DataError> {
    if xs.is_empty() {
        return Err(DataError::EmptyPoints);
    }
    if let Some(idx) = non_finite_idx(xs) {
        return Err(DataError::NonFinitePoint { idx });
    }

    if require_in_range {
        let (x_min, x_max) = table.span().ok_or(DataError::EmptyNodes)?;
        if let Some(&got) = xs.iter().find(|&&xq| xq < x_min || xq > x_max) {
            return Err(DataError::OutOfBounds { got, x_min, x_max });
        }
    }

    Ok(())
}


/// Checks that a table is long enough for `method`.
pub fn validate_min_points_for_method(
    table: &TabularFunction,
    required_points: usize,
    method: &'static str,
) -> Result<(), DataError> {
    if table.len() < required_points {
        return Err(DataError::InsufficientPointsForMethod {
            method,
            got: table.len(),
            need: required_points,
        });
    }
    Ok(())
}
