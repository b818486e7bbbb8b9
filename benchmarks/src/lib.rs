//! Shared helpers for wayfind benchmark suites.

use std::rc::Rc;

use wayfind_harness::config::{RunConfig, StrategyKind, VariantKind};
use wayfind_search::expander::NodeExpander;
use wayfind_search::node::Node;
use wayfind_search::problem::Problem;

/// One root with `width` children whose step costs cycle through 1..=7.
pub struct Fan {
    pub width: u32,
}

impl Problem for Fan {
    type State = u32;
    type Action = u32;

    fn initial_state(&self) -> u32 {
        0
    }

    fn actions(&self, state: &u32) -> Vec<u32> {
        if *state == 0 {
            (1..=self.width).collect()
        } else {
            Vec::new()
        }
    }

    fn result(&self, _state: &u32, action: &u32) -> u32 {
        *action
    }

    fn step_cost(&self, _from: &u32, action: &u32, _to: &u32) -> f64 {
        f64::from(action % 7 + 1)
    }

    fn is_goal(&self, _state: &u32) -> bool {
        false
    }
}

/// `width` sibling nodes with mixed path costs, for frontier benchmarks.
#[must_use]
pub fn fan_nodes(width: u32) -> Vec<Rc<Node<u32, u32>>> {
    let problem = Fan { width };
    let mut expander = NodeExpander::new();
    let root = expander.create_root_node(problem.initial_state());
    expander.expand(&root, &problem)
}

/// Named eight-puzzle run configurations, cheapest first.
#[must_use]
pub fn eight_puzzle_configs() -> Vec<(&'static str, RunConfig)> {
    let graph = |strategy| RunConfig::new(strategy).with_variant(VariantKind::Graph);
    vec![
        ("a_star_manhattan", graph(StrategyKind::AStar).with_heuristic("manhattan")),
        (
            "a_star_misplaced",
            graph(StrategyKind::AStar).with_heuristic("misplaced_tiles"),
        ),
        (
            "greedy_manhattan",
            graph(StrategyKind::GreedyBestFirst).with_heuristic("manhattan"),
        ),
        ("breadth_first", graph(StrategyKind::BreadthFirst)),
        ("uniform_cost", graph(StrategyKind::UniformCost)),
    ]
}
