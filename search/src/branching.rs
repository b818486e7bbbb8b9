//! Effective branching factor estimation.
//!
//! Given `n` expansions and a solution at depth `d`, the effective branching
//! factor is the `b` for which a uniform `b`-ary tree of depth `d` holds `n`
//! nodes: `Σ_{i=0..d} b^i ≈ n`.
//!
//! The solver walks `b` from 1.0 in steps of `initial_step`, reversing and
//! halving the step whenever the error changes sign, until the node-count
//! error is within `tolerance`.

use tracing::warn;

use crate::error::SearchError;

/// Default absolute tolerance on the node-count error.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Default initial step applied to the estimate.
pub const DEFAULT_INITIAL_STEP: f64 = 0.01;

/// Default cap on solver iterations.
pub const DEFAULT_MAX_ITERATIONS: u64 = 1_000_000;

/// Configuration for the branching factor solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EbfEstimator {
    /// Stop once `|Σ b^i − n| <= tolerance`.
    pub tolerance: f64,
    /// Step applied to `b` before the first sign change.
    pub initial_step: f64,
    /// Give up after this many iterations and return the latest estimate.
    pub max_iterations: u64,
}

impl EbfEstimator {
    /// Validate the solver parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidEstimator`] if the tolerance or step is
    /// not a positive finite number, or the iteration cap is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SearchError::InvalidEstimator {
                detail: format!("tolerance must be positive and finite, got {}", self.tolerance),
            });
        }
        if !(self.initial_step.is_finite() && self.initial_step > 0.0) {
            return Err(SearchError::InvalidEstimator {
                detail: format!(
                    "initial_step must be positive and finite, got {}",
                    self.initial_step
                ),
            });
        }
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidEstimator {
                detail: "max_iterations must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Estimate the effective branching factor for `expansions` nodes at
    /// solution depth `depth`.
    ///
    /// Returns `None` when the estimate is meaningless: no expansions, or a
    /// depth below 1 (the node count of a depth-0 tree is 1 for every `b`).
    /// Fractional depths (real-valued path costs) use `⌊depth⌋ + 1` terms.
    #[must_use]
    pub fn estimate(&self, expansions: u64, depth: f64) -> Option<f64> {
        if expansions == 0 || !depth.is_finite() || depth < 1.0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let terms = depth.floor() as u32;
        #[allow(clippy::cast_precision_loss)]
        let target = expansions as f64;

        let mut estimate = 1.0_f64;
        let mut step = self.initial_step;
        let mut last_sign = -1.0_f64;

        for _ in 0..self.max_iterations {
            let error = tree_size(estimate, terms) - target;
            if error.abs() <= self.tolerance {
                return Some(estimate);
            }
            let sign = error.signum();
            if sign > 0.0 {
                estimate -= step;
            } else {
                estimate += step;
            }
            if sign != last_sign {
                last_sign = sign;
                step /= 2.0;
            }
        }

        warn!(
            expansions,
            depth,
            estimate,
            max_iterations = self.max_iterations,
            "branching factor estimate did not converge"
        );
        Some(estimate)
    }
}

impl Default for EbfEstimator {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            initial_step: DEFAULT_INITIAL_STEP,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// `Σ_{i=0..=depth} b^i`.
fn tree_size(b: f64, depth: u32) -> f64 {
    let mut total = 0.0;
    let mut power = 1.0;
    for _ in 0..=depth {
        total += power;
        power *= b;
    }
    total
}
