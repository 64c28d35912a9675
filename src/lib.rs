//! Polynomial interpolation and five-point differentiation of tabulated
//! functions.
//!
//! A [`TabularFunction`] pairs strictly increasing nodes `x` with values `f`.
//! The engines evaluate it at arbitrary points:
//!
//! - [`interpolation`]   : `"lagrange"` and `"newton"` over all nodes
//! - [`differentiation`] : `"interpolation5"` and `"approximation5"` on 5-node stencils
//! - [`summary`]         : runs both methods of a task and compares them
//!
//! ```
//! use tabula::{interpolate, TabularFunction};
//!
//! let x = [-1.0, 0.0, 2.0];
//! let f = [2.0, 3.0, 11.0];
//! let report = interpolate("newton", &TabularFunction::new(&x, &f), &[0.5])?;
//! assert!((report.f[0] - 4.25).abs() < 1e-12);
//! # Ok::<(), tabula::TabulaError>(())
//! ```

pub mod errors;
pub mod input;
pub mod tabular;

pub mod differentiation;
pub mod interpolation;
pub mod summary;

pub use differentiation::differentiate;
pub use errors::{ConfigError, DataError, InputError, MethodError, TabulaError};
pub use interpolation::interpolate;
pub use summary::{build_differentiation_methods_summary, build_interpolation_methods_summary};
pub use tabular::TabularFunction;
