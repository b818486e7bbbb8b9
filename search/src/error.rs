//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal not found, depth limit reached, cancellation) are outcomes, not
//! errors; see [`crate::outcome::Failure`].

use thiserror::Error;

/// Typed failure for pre-flight search configuration.
///
/// Returned before any node is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Branching factor estimator parameters are unusable.
    #[error("invalid branching factor estimator: {detail}")]
    InvalidEstimator { detail: String },
}
