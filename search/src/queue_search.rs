//! Frontier-driven search loop shared by every queue-based strategy.
//!
//! The loop is generic over [`Frontier`]; breadth-first, depth-first,
//! uniform-cost, greedy, and A* differ only in the frontier they pass in.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::rc::Rc;

use tracing::debug;

use crate::branching::EbfEstimator;
use crate::cancel::CancelToken;
use crate::config::{QueueSearchConfig, SearchVariant};
use crate::error::SearchError;
use crate::expander::NodeExpander;
use crate::frontier::Frontier;
use crate::metrics::Metrics;
use crate::node::Node;
use crate::outcome::{Failure, SearchOutcome};
use crate::problem::Problem;

/// Graph-search bookkeeping: expanded states plus the cheapest path cost at
/// which each state currently sits in the frontier.
struct ExploredSet<S> {
    explored: HashSet<S>,
    in_frontier: HashMap<S, f64>,
    cheaper_duplicates: bool,
    /// Frontier entries superseded by a cheaper path to the same state.
    stale: usize,
}

impl<S: Clone + Eq + Hash> ExploredSet<S> {
    fn new(cheaper_duplicates: bool) -> Self {
        Self {
            explored: HashSet::new(),
            in_frontier: HashMap::new(),
            cheaper_duplicates,
            stale: 0,
        }
    }

    /// Whether a node reaching `state` at `cost` should enter the frontier.
    ///
    /// Explored states are rejected, and so is a state already in the
    /// frontier, unless `cheaper_duplicates` is set and `cost` is strictly
    /// lower. The costlier entry then becomes stale and is dropped by
    /// [`Self::claim`].
    fn admit(&mut self, state: &S, cost: f64) -> bool {
        if self.explored.contains(state) {
            return false;
        }
        match self.in_frontier.get(state) {
            None => {}
            Some(&best) if self.cheaper_duplicates && cost < best => self.stale += 1,
            Some(_) => return false,
        }
        self.in_frontier.insert(state.clone(), cost);
        true
    }

    /// Mark `state` explored. Returns `false` if it already was (stale entry).
    fn claim(&mut self, state: &S) -> bool {
        if !self.explored.insert(state.clone()) {
            self.stale = self.stale.saturating_sub(1);
            return false;
        }
        self.in_frontier.remove(state);
        true
    }

    /// Frontier entries that are not stale.
    fn live(&self, frontier_len: usize) -> usize {
        frontier_len.saturating_sub(self.stale)
    }
}

fn live_len<S>(frontier_len: usize, explored: Option<&ExploredSet<S>>) -> usize
where
    S: Clone + Eq + Hash,
{
    explored.map_or(frontier_len, |explored| explored.live(frontier_len))
}

/// The frontier-driven search engine.
#[derive(Debug, Clone)]
pub struct QueueSearch {
    expander: NodeExpander,
    config: QueueSearchConfig,
    metrics: Metrics,
}

impl QueueSearch {
    /// Build an engine after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the configuration is invalid.
    pub fn new(config: QueueSearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            expander: NodeExpander::new(),
            config,
            metrics: Metrics::new(),
        })
    }

    /// Build an engine whose estimator is the default, which needs no
    /// validation.
    pub(crate) fn with_default_estimator(config: QueueSearchConfig) -> Self {
        Self {
            expander: NodeExpander::new(),
            config: QueueSearchConfig {
                estimator: EbfEstimator::default(),
                ..config
            },
            metrics: Metrics::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &QueueSearchConfig {
        &self.config
    }

    /// Metrics of the last run. `nodes_expanded` mirrors the expander count.
    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn node_expander_mut(&mut self) -> &mut NodeExpander {
        &mut self.expander
    }

    /// Search `problem` using `frontier` to order expansion.
    ///
    /// Returns the first goal node found, or the reason none was: the frontier
    /// emptied, or `cancel` fired (checked once per loop iteration).
    pub fn find_node<P, F>(
        &mut self,
        problem: &P,
        mut frontier: F,
        cancel: &CancelToken,
    ) -> SearchOutcome<P::State, P::Action>
    where
        P: Problem,
        F: Frontier<P::State, P::Action>,
    {
        self.clear_instrumentation();
        let early = self.config.early_goal_test;
        let mut explored = match self.config.variant {
            SearchVariant::Tree => None,
            SearchVariant::Graph => Some(ExploredSet::new(frontier.admits_cheaper_duplicates())),
        };
        debug!(
            early_goal_test = early,
            variant = ?self.config.variant,
            "queue search started"
        );

        let root = self.expander.create_root_node(problem.initial_state());
        self.add_to_frontier(&mut frontier, explored.as_mut(), Rc::clone(&root));
        if early && problem.is_goal(root.state()) {
            return self.solution(root);
        }

        while !frontier.is_empty() && !cancel.is_cancelled() {
            let Some(node) = self.remove_from_frontier(&mut frontier, explored.as_mut()) else {
                // Only stale entries were left.
                break;
            };
            if !early && problem.is_goal(node.state()) {
                return self.solution(node);
            }
            for child in self.expander.expand(&node, problem) {
                self.add_to_frontier(&mut frontier, explored.as_mut(), Rc::clone(&child));
                if early && problem.is_goal(child.state()) {
                    return self.solution(child);
                }
            }
        }

        let failure = if cancel.is_cancelled() {
            Failure::Cancelled
        } else {
            Failure::Exhausted
        };
        self.failure(failure)
    }

    fn add_to_frontier<S, A, F>(
        &mut self,
        frontier: &mut F,
        mut explored: Option<&mut ExploredSet<S>>,
        node: Rc<Node<S, A>>,
    ) where
        S: Clone + Eq + Hash,
        F: Frontier<S, A>,
    {
        if let Some(explored) = explored.as_deref_mut() {
            if !explored.admit(node.state(), node.path_cost()) {
                return;
            }
        }
        frontier.insert(node);
        self.metrics
            .update_queue_size(live_len(frontier.len(), explored.as_deref()));
    }

    /// Remove the next node, skipping stale entries.
    fn remove_from_frontier<S, A, F>(
        &mut self,
        frontier: &mut F,
        mut explored: Option<&mut ExploredSet<S>>,
    ) -> Option<Rc<Node<S, A>>>
    where
        S: Clone + Eq + Hash,
        F: Frontier<S, A>,
    {
        loop {
            let node = frontier.remove()?;
            let stale = match explored.as_deref_mut() {
                Some(explored) => !explored.claim(node.state()),
                None => false,
            };
            self.metrics
                .update_queue_size(live_len(frontier.len(), explored.as_deref()));
            if !stale {
                return Some(node);
            }
        }
    }

    fn clear_instrumentation(&mut self) {
        self.expander.reset_counter();
        self.metrics.clear();
    }

    fn solution<S, A>(&mut self, node: Rc<Node<S, A>>) -> SearchOutcome<S, A> {
        let expansions = self.expander.expand_calls();
        self.metrics.nodes_expanded = expansions;
        self.metrics
            .record_solution(node.path_cost(), expansions, &self.config.estimator);
        debug!(
            nodes_expanded = expansions,
            path_cost = node.path_cost(),
            depth = node.depth(),
            "queue search reached goal"
        );
        SearchOutcome::Found(node)
    }

    fn failure<S, A>(&mut self, failure: Failure) -> SearchOutcome<S, A> {
        self.metrics.nodes_expanded = self.expander.expand_calls();
        self.metrics.record_failure(failure);
        debug!(
            nodes_expanded = self.metrics.nodes_expanded,
            ?failure,
            "queue search failed"
        );
        SearchOutcome::Failed(failure)
    }
}
