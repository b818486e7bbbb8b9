//! `PathGraph`: states `S0 → S1 → … → S(n-1)` joined by unit-cost edges.
//!
//! The goal is the last state, or a state past the end of the chain when
//! built with [`PathGraph::with_unreachable_goal`].

use wayfind_search::problem::Problem;

use crate::contract::SearchWorld;

const HEURISTICS: &[&str] = &["remaining_steps"];

/// A directed chain of `len` states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathGraph {
    len: u32,
    goal: u32,
}

impl PathGraph {
    /// Chain of `len` states (at least one) whose goal is the last state.
    #[must_use]
    pub fn new(len: u32) -> Self {
        let len = len.max(1);
        Self { len, goal: len - 1 }
    }

    /// Chain of `len` states whose goal is not one of them.
    #[must_use]
    pub fn with_unreachable_goal(len: u32) -> Self {
        let len = len.max(1);
        Self { len, goal: len }
    }

    #[must_use]
    pub fn state_count(&self) -> u32 {
        self.len
    }
}

impl Problem for PathGraph {
    type State = u32;
    /// The state the step moves to.
    type Action = u32;

    fn initial_state(&self) -> u32 {
        0
    }

    fn actions(&self, state: &u32) -> Vec<u32> {
        if state + 1 < self.len {
            vec![state + 1]
        } else {
            Vec::new()
        }
    }

    fn result(&self, _state: &u32, action: &u32) -> u32 {
        *action
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == self.goal
    }
}

impl SearchWorld for PathGraph {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "path_graph"
    }

    fn heuristics(&self) -> &[&'static str] {
        HEURISTICS
    }

    fn estimate(&self, name: &str, state: &u32) -> Option<f64> {
        match name {
            "remaining_steps" => Some(f64::from(self.goal.saturating_sub(*state))),
            _ => None,
        }
    }

    fn render_action(&self, action: &u32) -> String {
        format!("MoveTo(S{action})")
    }

    fn render_state(&self, state: &u32) -> String {
        format!("S{state}")
    }
}
