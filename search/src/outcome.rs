//! Search outcomes.

use std::rc::Rc;

use crate::node::Node;

/// Why a search returned no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The reachable space (within any bound) holds no goal.
    Exhausted,
    /// A standalone depth-limited search hit its bound somewhere; a deeper
    /// solution may exist.
    DepthLimitReached,
    /// The run was cancelled before a goal was found.
    Cancelled,
}

/// How the last search invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    GoalReached,
    Failed(Failure),
}

/// Result of a node-level search.
#[derive(Debug)]
pub enum SearchOutcome<S, A> {
    /// A node whose state satisfies the goal.
    Found(Rc<Node<S, A>>),
    Failed(Failure),
}

impl<S, A> SearchOutcome<S, A> {
    /// The goal node, if one was found.
    #[must_use]
    pub fn node(&self) -> Option<&Rc<Node<S, A>>> {
        match self {
            Self::Found(node) => Some(node),
            Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Three-valued result of depth-limited search.
///
/// `Cutoff` and `Failure` must stay distinct: iterative deepening only keeps
/// deepening after a cutoff.
#[derive(Debug)]
pub enum DepthLimitedOutcome<S, A> {
    Solution(Rc<Node<S, A>>),
    /// Truncated by the depth bound; a deeper solution may exist.
    Cutoff,
    /// No solution exists within the bound.
    Failure,
}

impl<S, A> DepthLimitedOutcome<S, A> {
    #[must_use]
    pub fn is_cutoff(&self) -> bool {
        matches!(self, Self::Cutoff)
    }

    #[must_use]
    pub fn solution(&self) -> Option<&Rc<Node<S, A>>> {
        match self {
            Self::Solution(node) => Some(node),
            Self::Cutoff | Self::Failure => None,
        }
    }
}

/// Result of an action-level search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionPlan<A> {
    /// The initial state already satisfies the goal.
    NoOp,
    /// Actions leading from the initial state to a goal state.
    Actions(Vec<A>),
    Failure(Failure),
}

impl<A> ActionPlan<A> {
    /// The actions to execute; empty for `NoOp` and for failures.
    #[must_use]
    pub fn actions(&self) -> &[A] {
        match self {
            Self::Actions(actions) => actions,
            Self::NoOp | Self::Failure(_) => &[],
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

impl<A: Clone> ActionPlan<A> {
    /// Plan for a search result: the root maps to `NoOp`.
    #[must_use]
    pub fn from_outcome<S>(outcome: &SearchOutcome<S, A>) -> Self {
        match outcome {
            SearchOutcome::Found(node) if node.is_root() => Self::NoOp,
            SearchOutcome::Found(node) => Self::Actions(Node::actions(node)),
            SearchOutcome::Failed(failure) => Self::Failure(*failure),
        }
    }
}
