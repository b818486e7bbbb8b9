//! Search configuration.

use crate::branching::EbfEstimator;
use crate::error::SearchError;

/// Whether the frontier engine remembers expanded states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchVariant {
    /// No explored set: states may be revisited. Lower memory per node, but
    /// cycles in the state space can make the search run forever.
    #[default]
    Tree,
    /// Explored-state set: each state is expanded at most once.
    Graph,
}

/// Configuration for the frontier-driven engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueSearchConfig {
    /// Test children for the goal when generated instead of when removed.
    ///
    /// Saves one layer of expansions for breadth-first search; makes
    /// successor order the tie-break among equally shallow solutions.
    pub early_goal_test: bool,
    /// Tree or graph search.
    pub variant: SearchVariant,
    /// Branching factor solver used when a solution is found.
    pub estimator: EbfEstimator,
}

impl QueueSearchConfig {
    /// Tree search with late goal testing.
    #[must_use]
    pub fn tree() -> Self {
        Self::default()
    }

    /// Graph search with late goal testing.
    #[must_use]
    pub fn graph() -> Self {
        Self {
            variant: SearchVariant::Graph,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_early_goal_test(mut self, enabled: bool) -> Self {
        self.early_goal_test = enabled;
        self
    }

    /// Validate the configuration before a run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidEstimator`] if the estimator parameters
    /// are unusable.
    pub fn validate(&self) -> Result<(), SearchError> {
        self.estimator.validate()
    }
}

impl Default for QueueSearchConfig {
    fn default() -> Self {
        Self {
            early_goal_test: false,
            variant: SearchVariant::Tree,
            estimator: EbfEstimator::default(),
        }
    }
}
