//! Node expansion: turns a node into its successors.

use std::rc::Rc;

use tracing::trace;

use crate::node::Node;
use crate::problem::Problem;

/// Creates root and successor nodes and counts expansions.
///
/// A single expander may be moved between searches (iterative deepening hands
/// it to every round) so its counter accumulates across them.
#[derive(Debug, Clone)]
pub struct NodeExpander {
    expand_calls: u64,
    parent_links: bool,
}

impl NodeExpander {
    /// A fresh expander that retains parent links.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expand_calls: 0,
            parent_links: true,
        }
    }

    /// Retain (`true`) or discard (`false`) parent links in produced nodes.
    ///
    /// Discarding saves memory when only the terminal state is wanted.
    pub fn use_parent_links(&mut self, enabled: bool) {
        self.parent_links = enabled;
    }

    /// Whether produced nodes carry parent links.
    #[must_use]
    pub fn parent_links(&self) -> bool {
        self.parent_links
    }

    /// Number of `expand` calls since the last reset.
    #[must_use]
    pub fn expand_calls(&self) -> u64 {
        self.expand_calls
    }

    /// Zero the expansion counter.
    pub fn reset_counter(&mut self) {
        self.expand_calls = 0;
    }

    /// Root node for `initial_state`: depth 0, cost 0, no parent or action.
    #[must_use]
    pub fn create_root_node<S, A>(&self, initial_state: S) -> Rc<Node<S, A>> {
        Rc::new(Node::root(initial_state))
    }

    /// One child per applicable action, in the order the problem reports them.
    pub fn expand<P: Problem>(
        &mut self,
        node: &Rc<Node<P::State, P::Action>>,
        problem: &P,
    ) -> Vec<Rc<Node<P::State, P::Action>>> {
        self.expand_calls += 1;
        let state = node.state();
        let children: Vec<_> = problem
            .actions(state)
            .into_iter()
            .map(|action| {
                let next = problem.result(state, &action);
                let cost = node.path_cost() + problem.step_cost(state, &action, &next);
                let parent = self.parent_links.then(|| Rc::clone(node));
                Rc::new(Node::child(next, parent, action, cost, node.depth() + 1))
            })
            .collect();
        trace!(
            expansion = self.expand_calls,
            depth = node.depth(),
            children = children.len(),
            "expanded node"
        );
        children
    }
}

impl Default for NodeExpander {
    fn default() -> Self {
        Self::new()
    }
}
