//! Uninformed strategies: breadth-first, depth-first, uniform-cost.

use crate::cancel::CancelToken;
use crate::config::QueueSearchConfig;
use crate::error::SearchError;
use crate::evaluation::PathCost;
use crate::expander::NodeExpander;
use crate::frontier::{FifoFrontier, LifoFrontier, PriorityFrontier};
use crate::metrics::Metrics;
use crate::outcome::SearchOutcome;
use crate::problem::Problem;
use crate::queue_search::QueueSearch;
use crate::search::Search;

/// Shared constructors and `Search` plumbing for strategies that own a
/// [`QueueSearch`] and differ only in the frontier they hand it.
macro_rules! queue_strategy {
    ($name:ident) => {
        impl $name {
            /// Build the strategy with an explicit engine configuration.
            ///
            /// # Errors
            ///
            /// Returns [`SearchError`] if `config` fails validation.
            pub fn with_config(config: QueueSearchConfig) -> Result<Self, SearchError> {
                Ok(Self {
                    engine: QueueSearch::new(config)?,
                })
            }

            /// Tree search with late goal testing.
            #[must_use]
            pub fn tree() -> Self {
                Self {
                    engine: QueueSearch::with_default_estimator(QueueSearchConfig::tree()),
                }
            }

            /// Graph search with late goal testing.
            #[must_use]
            pub fn graph() -> Self {
                Self {
                    engine: QueueSearch::with_default_estimator(QueueSearchConfig::graph()),
                }
            }

            #[must_use]
            pub fn config(&self) -> &QueueSearchConfig {
                self.engine.config()
            }

            /// Metrics of the most recent invocation.
            #[must_use]
            pub fn metrics(&self) -> &Metrics {
                self.engine.metrics()
            }

            pub fn node_expander_mut(&mut self) -> &mut NodeExpander {
                self.engine.node_expander_mut()
            }
        }
    };
}

/// Expands the shallowest node first (FIFO frontier).
///
/// With unit step costs the first solution found has the fewest actions.
#[derive(Debug, Clone)]
pub struct BreadthFirstSearch {
    engine: QueueSearch,
}

queue_strategy!(BreadthFirstSearch);

impl<P: Problem> Search<P> for BreadthFirstSearch {
    fn find_node(
        &mut self,
        problem: &P,
        cancel: &CancelToken,
    ) -> SearchOutcome<P::State, P::Action> {
        self.engine.find_node(problem, FifoFrontier::new(), cancel)
    }

    fn metrics(&self) -> &Metrics {
        self.engine.metrics()
    }

    fn node_expander_mut(&mut self) -> &mut NodeExpander {
        self.engine.node_expander_mut()
    }
}

/// Expands the deepest node first (LIFO frontier).
///
/// The tree variant does not terminate on state spaces with cycles.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    engine: QueueSearch,
}

queue_strategy!(DepthFirstSearch);

impl<P: Problem> Search<P> for DepthFirstSearch {
    fn find_node(
        &mut self,
        problem: &P,
        cancel: &CancelToken,
    ) -> SearchOutcome<P::State, P::Action> {
        self.engine.find_node(problem, LifoFrontier::new(), cancel)
    }

    fn metrics(&self) -> &Metrics {
        self.engine.metrics()
    }

    fn node_expander_mut(&mut self) -> &mut NodeExpander {
        self.engine.node_expander_mut()
    }
}

/// Expands the cheapest node first (priority by path cost).
///
/// Cost-optimal with late goal testing and non-negative step costs.
#[derive(Debug, Clone)]
pub struct UniformCostSearch {
    engine: QueueSearch,
}

queue_strategy!(UniformCostSearch);

impl<P: Problem> Search<P> for UniformCostSearch {
    fn find_node(
        &mut self,
        problem: &P,
        cancel: &CancelToken,
    ) -> SearchOutcome<P::State, P::Action> {
        self.engine
            .find_node(problem, PriorityFrontier::new(PathCost), cancel)
    }

    fn metrics(&self) -> &Metrics {
        self.engine.metrics()
    }

    fn node_expander_mut(&mut self) -> &mut NodeExpander {
        self.engine.node_expander_mut()
    }
}
