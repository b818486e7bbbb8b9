//! Iterative deepening: depth-limited search with limits 0, 1, 2, …

use std::mem;

use tracing::debug;

use crate::branching::EbfEstimator;
use crate::cancel::CancelToken;
use crate::depth_limited::DepthLimitedSearch;
use crate::error::SearchError;
use crate::expander::NodeExpander;
use crate::metrics::Metrics;
use crate::outcome::{DepthLimitedOutcome, Failure, SearchOutcome, Termination};
use crate::problem::Problem;
use crate::search::Search;

/// Repeats depth-limited search with a growing bound until a round ends in
/// anything other than a cutoff.
///
/// One [`NodeExpander`] is moved into every round and taken back afterwards,
/// so its counter covers the whole run. Finds the shallowest solution, like
/// breadth-first search, with depth-first memory use.
#[derive(Debug, Clone, Default)]
pub struct IterativeDeepeningSearch {
    expander: NodeExpander,
    estimator: EbfEstimator,
    metrics: Metrics,
}

impl IterativeDeepeningSearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns [`SearchError::InvalidEstimator`] if `estimator` fails
    /// validation.
    pub fn with_estimator(estimator: EbfEstimator) -> Result<Self, SearchError> {
        estimator.validate()?;
        Ok(Self {
            estimator,
            ..Self::default()
        })
    }

    /// Metrics aggregated over every round of the most recent invocation.
    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn node_expander_mut(&mut self) -> &mut NodeExpander {
        &mut self.expander
    }

    /// Fold one round's metrics into the run totals.
    ///
    /// Expansions add up; path cost and queue size reflect the latest round.
    /// Only a round with positive path cost (a solution below the root)
    /// updates the branching factor and the queue high-water mark.
    fn merge_round(&mut self, round: &Metrics) {
        self.metrics.nodes_expanded += round.nodes_expanded();
        self.metrics.path_cost = round.path_cost();
        self.metrics.queue_size = round.queue_size();
        if round.path_cost() > 0.0 {
            self.metrics.effective_branch_factor = self
                .estimator
                .estimate(self.expander.expand_calls(), round.path_cost())
                .unwrap_or(0.0);
            self.metrics.max_queue_size = round.max_queue_size();
        }
    }

    fn fail<S, A>(&mut self, failure: Failure) -> SearchOutcome<S, A> {
        self.metrics.record_failure(failure);
        debug!(
            nodes_expanded = self.metrics.nodes_expanded,
            ?failure,
            "iterative deepening failed"
        );
        SearchOutcome::Failed(failure)
    }
}

impl<P: Problem> Search<P> for IterativeDeepeningSearch {
    fn find_node(
        &mut self,
        problem: &P,
        cancel: &CancelToken,
    ) -> SearchOutcome<P::State, P::Action> {
        self.metrics.clear();
        self.expander.reset_counter();
        debug!("iterative deepening started");

        for limit in 0..=u32::MAX {
            if cancel.is_cancelled() {
                return self.fail(Failure::Cancelled);
            }
            let expander = mem::take(&mut self.expander);
            let mut round = DepthLimitedSearch::with_parts(limit, expander, self.estimator);
            let outcome = round.find_outcome(problem, cancel);
            let round_metrics = round.metrics().clone();
            self.expander = round.into_expander();
            self.merge_round(&round_metrics);
            debug!(
                limit,
                round_expanded = round_metrics.nodes_expanded(),
                total_expanded = self.metrics.nodes_expanded,
                "iterative deepening round finished"
            );

            match outcome {
                DepthLimitedOutcome::Cutoff => {}
                DepthLimitedOutcome::Solution(node) => {
                    self.metrics.termination = Some(Termination::GoalReached);
                    debug!(
                        limit,
                        path_cost = node.path_cost(),
                        "iterative deepening reached goal"
                    );
                    return SearchOutcome::Found(node);
                }
                DepthLimitedOutcome::Failure => return self.fail(Failure::Exhausted),
            }
        }

        let failure = if cancel.is_cancelled() {
            Failure::Cancelled
        } else {
            Failure::DepthLimitReached
        };
        self.fail(failure)
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn node_expander_mut(&mut self) -> &mut NodeExpander {
        &mut self.expander
    }
}
