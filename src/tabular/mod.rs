//! Tabulated functions and the checks and grid lookups shared by
//! every engine.
//!
//! [`TabularFunction`] borrows the caller's nodes `x` and values `f`;
//! nothing in the crate mutates them.

pub mod grid;
pub mod validation;


/// A function known only at its nodes.
///
/// # Fields
/// - `x` : nodes, expected strictly increasing and finite
/// - `f` : values at each node
///
/// Construction does not validate; engines call
/// [`validation::validate_tabular`] before reading the data.
#[derive(Debug, Clone, Copy)]
pub struct TabularFunction<'a> {
    x: &'a [f64],
    f: &'a [f64],
}

impl<'a> TabularFunction<'a> {
    pub fn new(x: &'a [f64], f: &'a [f64]) -> Self {
        Self { x, f }
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn f(&self) -> &'a [f64] { self.f }
    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// `(min(x), max(x))`, `None` for an empty table.
    pub fn span(&self) -> Option<(f64, f64)> {
        match (self.x.first(), self.x.last()) {
            (Some(&lo), Some(&hi)) => Some((lo, hi)),
            _ => None,
        }
    }
}
