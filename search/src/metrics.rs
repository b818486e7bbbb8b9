//! Per-invocation search instrumentation.

use std::collections::BTreeMap;
use std::fmt;

use crate::branching::EbfEstimator;
use crate::outcome::{Failure, Termination};

pub const METRIC_NODES_EXPANDED: &str = "nodesExpanded";
pub const METRIC_QUEUE_SIZE: &str = "queueSize";
pub const METRIC_MAX_QUEUE_SIZE: &str = "maxQueueSize";
pub const METRIC_PATH_COST: &str = "pathCost";
pub const METRIC_EFFECTIVE_BRANCH_FACTOR: &str = "effectiveBranchFactor";

/// All metric names, in snapshot order.
pub const METRIC_NAMES: [&str; 5] = [
    METRIC_NODES_EXPANDED,
    METRIC_QUEUE_SIZE,
    METRIC_MAX_QUEUE_SIZE,
    METRIC_PATH_COST,
    METRIC_EFFECTIVE_BRANCH_FACTOR,
];

/// Counters for one search invocation.
///
/// Every strategy clears its metrics when a new invocation starts; metrics are
/// never shared between invocations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    pub(crate) nodes_expanded: u64,
    pub(crate) queue_size: usize,
    pub(crate) max_queue_size: usize,
    pub(crate) path_cost: f64,
    pub(crate) effective_branch_factor: f64,
    pub(crate) termination: Option<Termination>,
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every counter to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    /// Current frontier occupancy (logical stack occupancy for depth-limited
    /// search).
    #[must_use]
    pub fn queue_size(&self) -> usize {
        self.queue_size
    }

    #[must_use]
    pub fn max_queue_size(&self) -> usize {
        self.max_queue_size
    }

    /// Path cost of the returned solution; 0 when none was found.
    #[must_use]
    pub fn path_cost(&self) -> f64 {
        self.path_cost
    }

    /// 0 when no solution was found or the solution depth is below 1.
    #[must_use]
    pub fn effective_branch_factor(&self) -> f64 {
        self.effective_branch_factor
    }

    /// How the last invocation ended (`None` before the first run).
    #[must_use]
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Set the current queue size, raising the maximum if exceeded.
    pub(crate) fn update_queue_size(&mut self, size: usize) {
        self.queue_size = size;
        if size > self.max_queue_size {
            self.max_queue_size = size;
        }
    }

    /// Record a solution: its path cost and the branching factor implied by
    /// `expansions` at that cost.
    pub(crate) fn record_solution(
        &mut self,
        path_cost: f64,
        expansions: u64,
        estimator: &EbfEstimator,
    ) {
        self.path_cost = path_cost;
        self.effective_branch_factor = estimator.estimate(expansions, path_cost).unwrap_or(0.0);
        self.termination = Some(Termination::GoalReached);
    }

    pub(crate) fn record_failure(&mut self, failure: Failure) {
        self.termination = Some(Termination::Failed(failure));
    }

    /// Look up a counter by its published name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        #[allow(clippy::cast_precision_loss)]
        let value = match name {
            METRIC_NODES_EXPANDED => self.nodes_expanded as f64,
            METRIC_QUEUE_SIZE => self.queue_size as f64,
            METRIC_MAX_QUEUE_SIZE => self.max_queue_size as f64,
            METRIC_PATH_COST => self.path_cost,
            METRIC_EFFECTIVE_BRANCH_FACTOR => self.effective_branch_factor,
            _ => return None,
        };
        Some(value)
    }

    /// All counters keyed by name.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<&'static str, f64> {
        METRIC_NAMES
            .iter()
            .filter_map(|name| self.get(name).map(|v| (*name, v)))
            .collect()
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{METRIC_NODES_EXPANDED} : {}", self.nodes_expanded)?;
        writeln!(f, "{METRIC_QUEUE_SIZE} : {}", self.queue_size)?;
        writeln!(f, "{METRIC_MAX_QUEUE_SIZE} : {}", self.max_queue_size)?;
        writeln!(f, "{METRIC_PATH_COST} : {}", self.path_cost)?;
        write!(
            f,
            "{METRIC_EFFECTIVE_BRANCH_FACTOR} : {:.3}",
            self.effective_branch_factor
        )
    }
}
