//! The common interface every strategy exposes.

use crate::cancel::CancelToken;
use crate::expander::NodeExpander;
use crate::metrics::Metrics;
use crate::outcome::{ActionPlan, SearchOutcome};
use crate::problem::Problem;

/// A search strategy over problems of type `P`.
///
/// Implementations provide [`Search::find_node`]; the action-level and
/// state-level entry points are derived from it. Every entry point clears the
/// strategy's metrics at start, so [`Search::metrics`] always describes the
/// most recent invocation.
pub trait Search<P: Problem> {
    /// Run the search and return the goal node or the reason none was found.
    fn find_node(
        &mut self,
        problem: &P,
        cancel: &CancelToken,
    ) -> SearchOutcome<P::State, P::Action>;

    /// Metrics of the most recent invocation.
    fn metrics(&self) -> &Metrics;

    /// The expander this strategy creates nodes with.
    fn node_expander_mut(&mut self) -> &mut NodeExpander;

    /// Search for the action sequence reaching a goal.
    ///
    /// Parent links are retained so the path can be reconstructed.
    fn find_actions(&mut self, problem: &P, cancel: &CancelToken) -> ActionPlan<P::Action> {
        self.node_expander_mut().use_parent_links(true);
        let outcome = self.find_node(problem, cancel);
        ActionPlan::from_outcome(&outcome)
    }

    /// Search for a goal state only.
    ///
    /// Parent links are discarded, so memory grows with the frontier rather
    /// than with the explored tree.
    fn find_state(&mut self, problem: &P, cancel: &CancelToken) -> Option<P::State> {
        self.node_expander_mut().use_parent_links(false);
        self.find_node(problem, cancel)
            .node()
            .map(|node| node.state().clone())
    }
}
