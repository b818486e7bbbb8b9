//! Harness runner: runs one configured strategy on one world and reports.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig::validate() → resolve heuristic → build strategy
//!   → find_node() → ActionPlan → render actions/state → RunReport
//! ```
//!
//! The runner holds no search logic; it only selects and drives a strategy
//! from `wayfind-search`.

use thiserror::Error;
use wayfind_search::cancel::CancelToken;
use wayfind_search::depth_limited::DepthLimitedSearch;
use wayfind_search::error::SearchError;
use wayfind_search::informed::BestFirstSearch;
use wayfind_search::iterative_deepening::IterativeDeepeningSearch;
use wayfind_search::outcome::ActionPlan;
use wayfind_search::search::Search;
use wayfind_search::uninformed::{BreadthFirstSearch, DepthFirstSearch, UniformCostSearch};

use crate::config::{ConfigError, RunConfig, StrategyKind};
use crate::contract::{SearchWorld, WorldHeuristic};
use crate::report::{RunOutcome, RunReport};

/// Error before a run could start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Search(#[from] SearchError),
    /// The configured heuristic is not one the world declares.
    #[error("world {world} has no heuristic named {name}")]
    UnknownHeuristic { world: String, name: String },
}

/// Run `config` against `world`.
///
/// Search failures (exhaustion, depth limit, cancellation) are reported in
/// [`RunReport::outcome`], not as errors.
///
/// # Errors
///
/// Returns [`RunError`] if the configuration is invalid or names a heuristic
/// the world does not declare.
pub fn run_search<W: SearchWorld>(
    world: &W,
    config: &RunConfig,
    cancel: &CancelToken,
) -> Result<RunReport, RunError> {
    config.validate()?;
    let queue = config.queue_config();

    let report = match config.strategy {
        StrategyKind::BreadthFirst => {
            execute(world, &mut BreadthFirstSearch::with_config(queue)?, config, cancel)
        }
        StrategyKind::DepthFirst => {
            execute(world, &mut DepthFirstSearch::with_config(queue)?, config, cancel)
        }
        StrategyKind::UniformCost => {
            execute(world, &mut UniformCostSearch::with_config(queue)?, config, cancel)
        }
        StrategyKind::GreedyBestFirst => {
            let heuristic = resolve_heuristic(world, config)?;
            execute(world, &mut BestFirstSearch::greedy(heuristic, queue)?, config, cancel)
        }
        StrategyKind::AStar => {
            let heuristic = resolve_heuristic(world, config)?;
            execute(world, &mut BestFirstSearch::a_star(heuristic, queue)?, config, cancel)
        }
        StrategyKind::DepthLimited => {
            // validate() guarantees the limit is present.
            let limit = config.depth_limit.ok_or(ConfigError::MissingDepthLimit {
                strategy: config.strategy.as_str(),
            })?;
            execute(world, &mut DepthLimitedSearch::new(limit), config, cancel)
        }
        StrategyKind::IterativeDeepening => {
            execute(world, &mut IterativeDeepeningSearch::new(), config, cancel)
        }
    };

    tracing::info!(
        world = %report.world_id,
        strategy = config.strategy.as_str(),
        variant = config.variant.as_str(),
        outcome = report.outcome.as_str(),
        nodes_expanded = report.metrics.nodes_expanded(),
        path_cost = report.metrics.path_cost(),
        "search run finished"
    );
    Ok(report)
}

fn resolve_heuristic<'w, W: SearchWorld>(
    world: &'w W,
    config: &'w RunConfig,
) -> Result<WorldHeuristic<'w, W>, RunError> {
    let name = config
        .heuristic
        .as_deref()
        .ok_or(ConfigError::MissingHeuristic {
            strategy: config.strategy.as_str(),
        })?;
    WorldHeuristic::resolve(world, name).ok_or_else(|| RunError::UnknownHeuristic {
        world: world.world_id().to_string(),
        name: name.to_string(),
    })
}

fn execute<W, S>(world: &W, strategy: &mut S, config: &RunConfig, cancel: &CancelToken) -> RunReport
where
    W: SearchWorld,
    S: Search<W>,
{
    strategy.node_expander_mut().use_parent_links(true);
    let outcome = strategy.find_node(world, cancel);
    let plan = ActionPlan::from_outcome(&outcome);

    RunReport {
        world_id: world.world_id().to_string(),
        config: config.clone(),
        outcome: RunOutcome::from_plan(&plan),
        actions: plan.actions().iter().map(|a| world.render_action(a)).collect(),
        final_state: outcome.node().map(|node| world.render_state(node.state())),
        metrics: strategy.metrics().clone(),
    }
}
