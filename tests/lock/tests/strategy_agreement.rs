//! Property tests: strategies agree with each other and with reference
//! shortest-path answers on generated graphs.

use lock_tests::random_graph::RandomGraph;
use proptest::prelude::*;
use wayfind_search::cancel::CancelToken;
use wayfind_search::config::QueueSearchConfig;
use wayfind_search::depth_limited::DepthLimitedSearch;
use wayfind_search::evaluation::ZeroHeuristic;
use wayfind_search::informed::BestFirstSearch;
use wayfind_search::iterative_deepening::IterativeDeepeningSearch;
use wayfind_search::outcome::{ActionPlan, Failure};
use wayfind_search::search::Search;
use wayfind_search::uninformed::{BreadthFirstSearch, DepthFirstSearch, UniformCostSearch};

fn graph_strategy() -> impl Strategy<Value = RandomGraph> {
    (2usize..9).prop_flat_map(|n| {
        (
            proptest::collection::vec((0..n, 0..n, 1u32..6), 0..(3 * n)),
            0..n,
        )
            .prop_map(move |(edges, goal)| RandomGraph::new(n, &edges, goal))
    })
}

/// Graphs whose goal is not a node, so every search exhausts.
fn goalless_graph_strategy() -> impl Strategy<Value = RandomGraph> {
    (2usize..9).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n, 1u32..6), 0..(3 * n))
            .prop_map(move |edges| RandomGraph::new(n, &edges, n))
    })
}

fn plan_len<A>(plan: &ActionPlan<A>) -> Option<usize> {
    match plan {
        ActionPlan::NoOp => Some(0),
        ActionPlan::Actions(actions) => Some(actions.len()),
        ActionPlan::Failure(_) => None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn breadth_first_finds_the_fewest_steps(graph in graph_strategy()) {
        let expected = graph.shortest_hops().map(|h| h as usize);
        let mut bfs = BreadthFirstSearch::graph();
        let plan = bfs.find_actions(&graph, &CancelToken::new());
        prop_assert_eq!(plan_len(&plan), expected);
        if let Some(hops) = expected {
            prop_assert!((bfs.metrics().path_cost() - hops as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn iterative_deepening_matches_breadth_first(graph in graph_strategy()) {
        // Tree search on a cyclic graph only terminates when a goal is reachable.
        prop_assume!(graph.shortest_hops().is_some());
        let cancel = CancelToken::new();
        let mut bfs = BreadthFirstSearch::graph();
        let bfs_plan = bfs.find_actions(&graph, &cancel);
        let mut ids = IterativeDeepeningSearch::new();
        let ids_plan = ids.find_actions(&graph, &cancel);
        prop_assert_eq!(plan_len(&ids_plan), plan_len(&bfs_plan));
        prop_assert!((ids.metrics().path_cost() - bfs.metrics().path_cost()).abs() < 1e-9);
    }

    #[test]
    fn cost_ordered_strategies_find_the_cheapest_route(graph in graph_strategy()) {
        let graph = graph.weighted();
        let expected = graph.cheapest_cost();
        let cancel = CancelToken::new();

        let mut ucs = UniformCostSearch::graph();
        let ucs_found = ucs.find_state(&graph, &cancel).is_some();
        let mut a_star =
            BestFirstSearch::a_star(ZeroHeuristic, QueueSearchConfig::graph()).unwrap();
        let a_star_found = a_star.find_state(&graph, &cancel).is_some();

        prop_assert_eq!(ucs_found, expected.is_some());
        prop_assert_eq!(a_star_found, expected.is_some());
        if let Some(cost) = expected {
            prop_assert!((ucs.metrics().path_cost() - cost).abs() < 1e-9);
            prop_assert!((a_star.metrics().path_cost() - cost).abs() < 1e-9);
        }
    }

    #[test]
    fn depth_limited_never_exceeds_its_limit(graph in graph_strategy(), limit in 0u32..6) {
        let mut dls = DepthLimitedSearch::new(limit);
        let outcome = dls.find_node(&graph, &CancelToken::new());
        let shallowest = graph.shortest_hops();
        match outcome.node() {
            Some(node) => prop_assert!(node.depth() <= limit),
            None => prop_assert!(shallowest.map_or(true, |d| d > limit)),
        }
        prop_assert_eq!(outcome.is_found(), shallowest.is_some_and(|d| d <= limit));
    }

    #[test]
    fn graph_search_expands_each_reachable_state_once(graph in goalless_graph_strategy()) {
        let reachable = graph.reachable_count() as u64;
        let cancel = CancelToken::new();

        let mut bfs = BreadthFirstSearch::graph();
        prop_assert_eq!(bfs.find_actions(&graph, &cancel), ActionPlan::Failure(Failure::Exhausted));
        prop_assert_eq!(bfs.metrics().nodes_expanded(), reachable);

        let mut dfs = DepthFirstSearch::graph();
        prop_assert_eq!(dfs.find_state(&graph, &cancel), None);
        prop_assert_eq!(dfs.metrics().nodes_expanded(), reachable);

        let weighted = graph.weighted();
        let mut ucs = UniformCostSearch::graph();
        prop_assert_eq!(ucs.find_state(&weighted, &cancel), None);
        prop_assert_eq!(ucs.metrics().nodes_expanded(), reachable);
    }
}
