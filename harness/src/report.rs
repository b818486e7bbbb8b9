//! Run reports: what a search run produced, in a hashable form.
//!
//! # Report JSON (`run_report.v1`)
//!
//! ```text
//! {
//!   "actions":        ["Go(Sibiu)", ...],
//!   "config":         { strategy, variant, early_goal_test, depth_limit, heuristic },
//!   "config_digest":  "sha256:...",
//!   "final_state":    "Bucharest" | null,
//!   "metrics":        { nodesExpanded, queueSize, maxQueueSize: int,
//!                       pathCost, effectiveBranchFactor: fixed-decimal string },
//!   "outcome":        "solved" | "no_op" | "exhausted" | "depth_limit_reached" | "cancelled",
//!   "schema_version": "run_report.v1",
//!   "world_id":       "route_map"
//! }
//! ```
//!
//! The digest is computed over the canonical bytes of this object. Reals are
//! strings so the canonical form stays integer-only.

use serde_json::{json, Value};
use wayfind_search::metrics::{
    Metrics, METRIC_EFFECTIVE_BRANCH_FACTOR, METRIC_MAX_QUEUE_SIZE, METRIC_NODES_EXPANDED,
    METRIC_PATH_COST, METRIC_QUEUE_SIZE,
};
use wayfind_search::outcome::{ActionPlan, Failure};

use crate::canon::{canonical_json_bytes, fixed_real, CanonError};
use crate::config::RunConfig;
use crate::hash::{canonical_hash, ContentHash, DOMAIN_RUN_CONFIG, DOMAIN_RUN_REPORT};

pub const REPORT_SCHEMA_VERSION: &str = "run_report.v1";

/// How a run ended, as recorded in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Solved,
    /// The initial state was already a goal.
    NoOp,
    Exhausted,
    DepthLimitReached,
    Cancelled,
}

impl RunOutcome {
    #[must_use]
    pub fn from_plan<A>(plan: &ActionPlan<A>) -> Self {
        match plan {
            ActionPlan::NoOp => Self::NoOp,
            ActionPlan::Actions(_) => Self::Solved,
            ActionPlan::Failure(Failure::Exhausted) => Self::Exhausted,
            ActionPlan::Failure(Failure::DepthLimitReached) => Self::DepthLimitReached,
            ActionPlan::Failure(Failure::Cancelled) => Self::Cancelled,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solved => "solved",
            Self::NoOp => "no_op",
            Self::Exhausted => "exhausted",
            Self::DepthLimitReached => "depth_limit_reached",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the run reached a goal (including the no-op case).
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Solved | Self::NoOp)
    }
}

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub world_id: String,
    pub config: RunConfig,
    pub outcome: RunOutcome,
    /// Rendered actions, empty unless solved.
    pub actions: Vec<String>,
    /// Rendered goal state, present on success.
    pub final_state: Option<String>,
    pub metrics: Metrics,
}

impl RunReport {
    /// The report as a JSON object (see the module docs for the layout).
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the config digest cannot be computed.
    pub fn to_json_value(&self) -> Result<Value, CanonError> {
        Ok(json!({
            "schema_version": REPORT_SCHEMA_VERSION,
            "world_id": self.world_id,
            "config": config_json(&self.config),
            "config_digest": config_digest(&self.config)?.as_str(),
            "outcome": self.outcome.as_str(),
            "actions": self.actions,
            "final_state": self.final_state,
            "metrics": metrics_json(&self.metrics),
        }))
    }

    /// Canonical JSON bytes of the report.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] on a non-integer number.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value()?)
    }

    /// Domain-separated digest of [`RunReport::canonical_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] on a non-integer number.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(report_digest(&self.canonical_bytes()?))
    }
}

/// Digest of canonical report bytes.
#[must_use]
pub fn report_digest(canonical_report: &[u8]) -> ContentHash {
    canonical_hash(DOMAIN_RUN_REPORT, canonical_report)
}

/// Digest identifying a run configuration independent of its results.
///
/// # Errors
///
/// Returns [`CanonError`] on a non-integer number.
pub fn config_digest(config: &RunConfig) -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(&config_json(config))?;
    Ok(canonical_hash(DOMAIN_RUN_CONFIG, &bytes))
}

fn config_json(config: &RunConfig) -> Value {
    json!({
        "strategy": config.strategy.as_str(),
        "variant": config.variant.as_str(),
        "early_goal_test": config.early_goal_test,
        "depth_limit": config.depth_limit,
        "heuristic": config.heuristic,
    })
}

fn metrics_json(metrics: &Metrics) -> Value {
    json!({
        METRIC_NODES_EXPANDED: metrics.nodes_expanded(),
        METRIC_QUEUE_SIZE: metrics.queue_size(),
        METRIC_MAX_QUEUE_SIZE: metrics.max_queue_size(),
        METRIC_PATH_COST: fixed_real(metrics.path_cost()),
        METRIC_EFFECTIVE_BRANCH_FACTOR: fixed_real(metrics.effective_branch_factor()),
    })
}
