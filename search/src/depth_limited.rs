//! Recursive depth-limited search.
//!
//! Distinguishes a search that was truncated by its bound ([`Cutoff`]) from
//! one that proved no solution exists within it ([`Failure`]). Iterative
//! deepening keeps deepening only after a cutoff.
//!
//! [`Cutoff`]: DepthLimitedOutcome::Cutoff
//! [`Failure`]: DepthLimitedOutcome::Failure

use std::rc::Rc;

use tracing::debug;

use crate::branching::EbfEstimator;
use crate::cancel::CancelToken;
use crate::error::SearchError;
use crate::expander::NodeExpander;
use crate::metrics::Metrics;
use crate::node::Node;
use crate::outcome::{DepthLimitedOutcome, Failure, SearchOutcome};
use crate::problem::Problem;
use crate::search::Search;

/// Depth-first search that never expands nodes at depth `limit`.
///
/// `queue_size` tracks the logical stack: children generated but whose
/// subtrees have not been fully explored yet.
#[derive(Debug, Clone)]
pub struct DepthLimitedSearch {
    limit: u32,
    expander: NodeExpander,
    estimator: EbfEstimator,
    metrics: Metrics,
}

impl DepthLimitedSearch {
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self::with_expander(limit, NodeExpander::new())
    }

    /// Build a search that creates nodes with an existing expander.
    ///
    /// The expander's counter is not reset by [`Self::find_outcome`], so
    /// successive searches sharing one expander accumulate expansions.
    #[must_use]
    pub fn with_expander(limit: u32, expander: NodeExpander) -> Self {
        Self {
            limit,
            expander,
            estimator: EbfEstimator::default(),
            metrics: Metrics::new(),
        }
    }

    pub(crate) fn with_parts(limit: u32, expander: NodeExpander, estimator: EbfEstimator) -> Self {
        Self {
            estimator,
            ..Self::with_expander(limit, expander)
        }
    }

    /// Replace the branching factor solver.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidEstimator`] if `estimator` fails
    /// validation.
    pub fn with_estimator(mut self, estimator: EbfEstimator) -> Result<Self, SearchError> {
        estimator.validate()?;
        self.estimator = estimator;
        Ok(self)
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Metrics of the most recent invocation.
    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn node_expander_mut(&mut self) -> &mut NodeExpander {
        &mut self.expander
    }

    /// Give the expander back, with its accumulated count.
    #[must_use]
    pub fn into_expander(self) -> NodeExpander {
        self.expander
    }

    /// Search to the configured depth and report the three-valued outcome.
    ///
    /// Clears metrics; leaves the expander counter untouched.
    pub fn find_outcome<P: Problem>(
        &mut self,
        problem: &P,
        cancel: &CancelToken,
    ) -> DepthLimitedOutcome<P::State, P::Action> {
        self.metrics.clear();
        debug!(limit = self.limit, "depth-limited search started");
        let root = self.expander.create_root_node(problem.initial_state());
        let outcome = self.recursive_dls(root, problem, self.limit, cancel);
        match &outcome {
            DepthLimitedOutcome::Solution(node) => {
                debug!(
                    limit = self.limit,
                    depth = node.depth(),
                    nodes_expanded = self.metrics.nodes_expanded,
                    "depth-limited search reached goal"
                );
            }
            DepthLimitedOutcome::Cutoff => {
                let failure = if cancel.is_cancelled() {
                    Failure::Cancelled
                } else {
                    Failure::DepthLimitReached
                };
                self.metrics.record_failure(failure);
                debug!(limit = self.limit, ?failure, "depth-limited search cut off");
            }
            DepthLimitedOutcome::Failure => {
                self.metrics.record_failure(Failure::Exhausted);
                debug!(limit = self.limit, "depth-limited search exhausted");
            }
        }
        outcome
    }

    fn recursive_dls<P: Problem>(
        &mut self,
        node: Rc<Node<P::State, P::Action>>,
        problem: &P,
        remaining: u32,
        cancel: &CancelToken,
    ) -> DepthLimitedOutcome<P::State, P::Action> {
        if problem.is_goal(node.state()) {
            self.metrics.record_solution(
                node.path_cost(),
                self.expander.expand_calls(),
                &self.estimator,
            );
            return DepthLimitedOutcome::Solution(node);
        }
        if remaining == 0 || cancel.is_cancelled() {
            return DepthLimitedOutcome::Cutoff;
        }

        self.metrics.nodes_expanded += 1;
        let children = self.expander.expand(&node, problem);
        let stacked = self.metrics.queue_size + children.len();
        self.metrics.update_queue_size(stacked);

        let mut cutoff_occurred = false;
        for child in children {
            let outcome = self.recursive_dls(child, problem, remaining - 1, cancel);
            self.metrics.queue_size = self.metrics.queue_size.saturating_sub(1);
            match outcome {
                DepthLimitedOutcome::Solution(_) => return outcome,
                DepthLimitedOutcome::Cutoff => cutoff_occurred = true,
                DepthLimitedOutcome::Failure => {}
            }
        }
        if cutoff_occurred {
            DepthLimitedOutcome::Cutoff
        } else {
            DepthLimitedOutcome::Failure
        }
    }
}

impl<P: Problem> Search<P> for DepthLimitedSearch {
    /// Standalone run: resets the expander counter, then maps a cutoff to
    /// [`Failure::DepthLimitReached`] (or [`Failure::Cancelled`]).
    fn find_node(
        &mut self,
        problem: &P,
        cancel: &CancelToken,
    ) -> SearchOutcome<P::State, P::Action> {
        self.expander.reset_counter();
        match self.find_outcome(problem, cancel) {
            DepthLimitedOutcome::Solution(node) => SearchOutcome::Found(node),
            DepthLimitedOutcome::Cutoff if cancel.is_cancelled() => {
                SearchOutcome::Failed(Failure::Cancelled)
            }
            DepthLimitedOutcome::Cutoff => SearchOutcome::Failed(Failure::DepthLimitReached),
            DepthLimitedOutcome::Failure => SearchOutcome::Failed(Failure::Exhausted),
        }
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn node_expander_mut(&mut self) -> &mut NodeExpander {
        &mut self.expander
    }
}
