//! Cross-method comparisons for each task.
//!
//! - [`interpolation`]   : Lagrange vs. Newton
//! - [`differentiation`] : `interpolation5` vs. `approximation5`

pub(crate) mod stats;

pub mod differentiation;
pub mod interpolation;

pub use differentiation::{
    build_differentiation_methods_summary,
    build_differentiation_methods_summary_with_cfg,
    DifferentiationRow,
    DifferentiationSummary,
};
pub use interpolation::{build_interpolation_methods_summary, InterpolationRow, InterpolationSummary};
