//! Problem contract: the capabilities a domain must provide to be searched.

use std::hash::Hash;

/// Trait for problems that support search.
///
/// # Contract
///
/// - `actions` must be deterministic: same state → same actions in the same
///   order. Order is the tie-break among equally good successors.
/// - `result` must be a pure function of `(state, action)`.
/// - `step_cost` must be non-negative.
///
/// Violations are not detected; they are a contract breach by the problem.
pub trait Problem {
    /// Problem-defined state, compared by value.
    type State: Clone + Eq + Hash;
    /// Problem-defined transition label.
    type Action: Clone;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Actions applicable in `state`. An empty list marks a dead end.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` in `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Cost of the transition `from --action--> to`. Defaults to 1.
    fn step_cost(&self, _from: &Self::State, _action: &Self::Action, _to: &Self::State) -> f64 {
        1.0
    }

    /// Test whether `state` satisfies the problem's goal.
    fn is_goal(&self, state: &Self::State) -> bool;
}

/// A goal predicate supplied separately from the problem.
pub trait GoalTest<S> {
    fn is_goal(&self, state: &S) -> bool;
}

impl<S, F> GoalTest<S> for F
where
    F: Fn(&S) -> bool,
{
    fn is_goal(&self, state: &S) -> bool {
        self(state)
    }
}

/// A problem whose goal test is replaced by an external predicate.
///
/// Everything except `is_goal` is delegated to the wrapped problem.
#[derive(Debug, Clone)]
pub struct WithGoal<P, G> {
    inner: P,
    goal: G,
}

impl<P, G> WithGoal<P, G> {
    #[must_use]
    pub fn new(inner: P, goal: G) -> Self {
        Self { inner, goal }
    }

    /// The wrapped problem.
    #[must_use]
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P, G> Problem for WithGoal<P, G>
where
    P: Problem,
    G: GoalTest<P::State>,
{
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> Self::State {
        self.inner.initial_state()
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        self.inner.actions(state)
    }

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        self.inner.result(state, action)
    }

    fn step_cost(&self, from: &Self::State, action: &Self::Action, to: &Self::State) -> f64 {
        self.inner.step_cost(from, action, to)
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.goal.is_goal(state)
    }
}
