//! Informed strategies: best-first search ordered by an evaluation function.

use crate::cancel::CancelToken;
use crate::config::QueueSearchConfig;
use crate::error::SearchError;
use crate::evaluation::{AStar, EvaluationFunction, Greedy};
use crate::expander::NodeExpander;
use crate::frontier::PriorityFrontier;
use crate::metrics::Metrics;
use crate::outcome::SearchOutcome;
use crate::problem::Problem;
use crate::queue_search::QueueSearch;
use crate::search::Search;

/// Best-first search: always expands the frontier node with the lowest `f`.
///
/// The evaluation function is cloned into a fresh [`PriorityFrontier`] for
/// every invocation.
#[derive(Debug, Clone)]
pub struct BestFirstSearch<E> {
    engine: QueueSearch,
    evaluation: E,
}

impl<E> BestFirstSearch<E> {
    /// # Errors
    ///
    /// Returns [`SearchError`] if `config` fails validation.
    pub fn new(evaluation: E, config: QueueSearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            engine: QueueSearch::new(config)?,
            evaluation,
        })
    }

    #[must_use]
    pub fn evaluation(&self) -> &E {
        &self.evaluation
    }

    #[must_use]
    pub fn config(&self) -> &QueueSearchConfig {
        self.engine.config()
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        self.engine.metrics()
    }

    pub fn node_expander_mut(&mut self) -> &mut NodeExpander {
        self.engine.node_expander_mut()
    }
}

impl<H> BestFirstSearch<Greedy<H>> {
    /// Greedy best-first search (`f = h`).
    ///
    /// Usually expands few nodes, but the solution is not guaranteed to be the
    /// cheapest; the tree variant may loop on cyclic spaces.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if `config` fails validation.
    pub fn greedy(heuristic: H, config: QueueSearchConfig) -> Result<Self, SearchError> {
        Self::new(Greedy(heuristic), config)
    }
}

impl<H> BestFirstSearch<AStar<H>> {
    /// A* search (`f = g + h`).
    ///
    /// Cost-optimal with late goal testing when `h` is admissible; the graph
    /// variant additionally needs `h` consistent.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if `config` fails validation.
    pub fn a_star(heuristic: H, config: QueueSearchConfig) -> Result<Self, SearchError> {
        Self::new(AStar(heuristic), config)
    }
}

impl<P, E> Search<P> for BestFirstSearch<E>
where
    P: Problem,
    E: EvaluationFunction<P::State, P::Action> + Clone,
{
    fn find_node(
        &mut self,
        problem: &P,
        cancel: &CancelToken,
    ) -> SearchOutcome<P::State, P::Action> {
        let frontier = PriorityFrontier::new(self.evaluation.clone());
        self.engine.find_node(problem, frontier, cancel)
    }

    fn metrics(&self) -> &Metrics {
        self.engine.metrics()
    }

    fn node_expander_mut(&mut self) -> &mut NodeExpander {
        self.engine.node_expander_mut()
    }
}
