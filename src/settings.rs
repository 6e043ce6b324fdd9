use crate::constants::{DEFAULT_MAX_ITERATIONS, DEFAULT_RELATIVE_ERROR_THRESHOLD};
use crate::Num;

/// Controls for a Newton-Raphson run.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonSettings {
    /// Convergence is declared once `|x_next - x| < |x| * relative_error_threshold`.
    pub relative_error_threshold: Num,
    /// Hard cap on the iteration counter.
    pub max_iterations: usize,
}

impl NewtonSettings {
    pub fn new(relative_error_threshold: Num, max_iterations: usize) -> Self {
        Self {
            relative_error_threshold,
            max_iterations,
        }
    }

    pub fn with_relative_error_threshold(mut self, relative_error_threshold: Num) -> Self {
        self.relative_error_threshold = relative_error_threshold;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl Default for NewtonSettings {
    fn default() -> Self {
        Self::new(DEFAULT_RELATIVE_ERROR_THRESHOLD, DEFAULT_MAX_ITERATIONS)
    }
}
