//! Search configuration.

use crate::error::PoleError;
use num_traits::Float;

/// Options for the pole search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylabelOptions<F> {
    /// Tolerance on the reported distance. A cell is discarded once its bound
    /// exceeds the best distance found so far by no more than this.
    pub precision: F,
    /// Optional cap on the number of cells taken off the frontier.
    ///
    /// `None` lets the search run until every branch has been pruned.
    pub max_iterations: Option<usize>,
}

impl<F: Float> Default for PolylabelOptions<F> {
    fn default() -> Self {
        Self {
            precision: F::one(),
            max_iterations: None,
        }
    }
}

impl<F: Float> PolylabelOptions<F> {
    /// Creates options with the given precision.
    pub fn with_precision(precision: F) -> Self {
        Self {
            precision,
            ..Default::default()
        }
    }

    /// Sets the precision.
    pub fn precision(mut self, precision: F) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the iteration budget.
    pub fn max_iterations(mut self, limit: usize) -> Self {
        self.max_iterations = Some(limit);
        self
    }

    /// Checks that the options describe a search that can terminate.
    pub fn validate(&self) -> Result<(), PoleError> {
        if !(self.precision.is_finite() && self.precision > F::zero()) {
            return Err(PoleError::InvalidPrecision {
                precision: self.precision.to_f64().unwrap_or(f64::NAN),
            });
        }
        if self.max_iterations == Some(0) {
            return Err(PoleError::InvalidIterationBudget);
        }
        Ok(())
    }
}
