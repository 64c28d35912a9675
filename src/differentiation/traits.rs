use crate::errors::DataError;

/// A derivative estimator built over a validated table.
pub trait Differentiator {
    /// derivative at a single point
    fn derivative(&self, x: f64) -> Result<f64, DataError>;

    /// derivatives at many points, stopping at the first failure
    #[inline]
    fn derivative_many(&self, xs: &[f64]) -> Result<Vec<f64>, DataError> {
        xs.iter().map(|&xq| self.derivative(xq)).collect()
    }
}
