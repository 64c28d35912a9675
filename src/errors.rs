//! Error types.
//!
//! ┌ [`DataError`]   : malformed, insufficient or out-of-range input
//! │   ├ length mismatch, too few nodes, non-finite values
//! │   ├ non-increasing nodes, empty or out-of-range points
//! │   └ non-uniform grid, point not on a node
//! │
//! ├ [`MethodError`] : unrecognized method identifier
//! │
//! ├ [`ConfigError`] : invalid tolerance settings
//! │
//! ├ [`InputError`]  : text ingestion failures
//! │
//! └ [`TabulaError`] : crate-level wrapper returned by the dispatchers


use thiserror::Error;


/// Input data errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("unequal length: x has {x_len} elements, f has {f_len}")]
    UnequalLength { x_len: usize, f_len: usize },

    #[error("insufficient points: got {got}, need at least {need}")]
    InsufficientPoints { got: usize, need: usize },

    #[error("method `{method}` needs at least {need} nodes, got {got}")]
    InsufficientPointsForMethod { method: &'static str, got: usize, need: usize },

    #[error("non-finite node x[{idx}]")]
    NonFiniteNode { idx: usize },

    #[error("non-finite value f[{idx}]")]
    NonFiniteValue { idx: usize },

    #[error("x-values must be strictly increasing: x[{idx}]={got} after {prev}")]
    NonIncreasingX { idx: usize, prev: f64, got: f64 },

    #[error("empty node vector")]
    EmptyNodes,

    #[error("no points to evaluate")]
    EmptyPoints,

    #[error("non-finite evaluation point at index {idx}")]
    NonFinitePoint { idx: usize },

    #[error("evaluation point {got} out of bounds in [{x_min}, {x_max}]")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64 },

    #[error("grid is not uniform within tolerance {tol}")]
    NonUniformGrid { tol: f64 },

    #[error("invalid grid step h={h}: must be finite and non-zero")]
    InvalidStep { h: f64 },

    #[error("point {got} is not within {tol} of any node (nearest x={nearest})")]
    NotOnNode { got: f64, nearest: f64, tol: f64 },
}


/// Method selection errors.
///
/// - Raised by the dispatchers when a method name is not one
///   of the recognized identifiers for the task.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MethodError {
    #[error("method not supported: got `{method}`, expected one of {expected}")]
    NotSupported { method: String, expected: &'static str },
}


/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid `step_tol`: must be finite and > 0. got {got}")]
    InvalidStepTol { got: f64 },

    #[error("invalid `node_tol_factor`: must be finite and > 0. got {got}")]
    InvalidNodeTolFactor { got: f64 },
}


/// Text ingestion errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("no numbers found in input")]
    Empty,

    #[error("invalid number `{token}` at position {position}")]
    InvalidNumber { token: String, position: usize },

    #[error("x has {x_len} numbers, f has {f_len}")]
    LengthMismatch { x_len: usize, f_len: usize },
}


#[derive(Debug, Clone, PartialEq, Error)]
pub enum TabulaError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Method(#[from] MethodError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),
}
