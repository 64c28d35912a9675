//! Tolerances for the differentiation engine.
//!
//! [`DifferentiationCfg`]
//! - `step_tol`        : allowed deviation of each spacing from the mean step
//! - `node_tol_factor` : a point matches a node within `|h| * node_tol_factor`
//!
//! [`DifferentiationCfg::new`] initializes configuration with default values.


use crate::errors::ConfigError;

pub const DEFAULT_STEP_TOL: f64 = 1e-6;
pub const DEFAULT_NODE_TOL_FACTOR: f64 = 1e-3;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DifferentiationCfg {
    step_tol: f64,
    node_tol_factor: f64,
}

impl Default for DifferentiationCfg {
    fn default() -> Self {
        Self::new()
    }
}

impl DifferentiationCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step_tol: DEFAULT_STEP_TOL,
            node_tol_factor: DEFAULT_NODE_TOL_FACTOR,
        }
    }

    // getters
    pub fn step_tol(&self) -> f64 { self.step_tol }
    pub fn node_tol_factor(&self) -> f64 { self.node_tol_factor }

    pub fn set_step_tol(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidStepTol { got: v });
        }
        self.step_tol = v;
        Ok(self)
    }

    pub fn set_node_tol_factor(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidNodeTolFactor { got: v });
        }
        self.node_tol_factor = v;
        Ok(self)
    }
}
