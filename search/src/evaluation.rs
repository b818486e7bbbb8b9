//! Evaluation functions and heuristics for priority-ordered search.

use crate::node::Node;

/// Scores a node for a priority frontier. Lower is expanded first.
pub trait EvaluationFunction<S, A> {
    fn f(&self, node: &Node<S, A>) -> f64;
}

impl<S, A, F> EvaluationFunction<S, A> for F
where
    F: Fn(&Node<S, A>) -> f64,
{
    fn f(&self, node: &Node<S, A>) -> f64 {
        self(node)
    }
}

/// Estimated cost from a state to the nearest goal (`h`).
///
/// A* is cost-optimal when `h` is admissible (never overestimates) and
/// consistent (`h(n) <= c(n, n') + h(n')`).
pub trait Heuristic<S> {
    fn h(&self, state: &S) -> f64;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> f64,
{
    fn h(&self, state: &S) -> f64 {
        self(state)
    }
}

/// `h = 0` for every state. A* with this heuristic is uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn h(&self, _state: &S) -> f64 {
        0.0
    }
}

/// `f = g`: uniform-cost ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathCost;

impl<S, A> EvaluationFunction<S, A> for PathCost {
    fn f(&self, node: &Node<S, A>) -> f64 {
        node.path_cost()
    }
}

/// `f = h`: greedy best-first ordering. No optimality guarantee.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy<H>(pub H);

impl<S, A, H: Heuristic<S>> EvaluationFunction<S, A> for Greedy<H> {
    fn f(&self, node: &Node<S, A>) -> f64 {
        self.0.h(node.state())
    }
}

/// `f = g + h`: A* ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar<H>(pub H);

impl<S, A, H: Heuristic<S>> EvaluationFunction<S, A> for AStar<H> {
    fn f(&self, node: &Node<S, A>) -> f64 {
        node.path_cost() + self.0.h(node.state())
    }
}
