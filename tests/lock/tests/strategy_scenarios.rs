//! Lock tests: fixed scenarios every strategy must reproduce.
//!
//! These drive `wayfind-search` strategies directly against the harness
//! worlds, without the runner.

use wayfind_harness::contract::WorldHeuristic;
use wayfind_harness::worlds::eight_puzzle::{Board, EightPuzzle, Move};
use wayfind_harness::worlds::path_graph::PathGraph;
use wayfind_harness::worlds::route_map::RouteMap;
use wayfind_search::cancel::CancelToken;
use wayfind_search::config::QueueSearchConfig;
use wayfind_search::depth_limited::DepthLimitedSearch;
use wayfind_search::evaluation::ZeroHeuristic;
use wayfind_search::informed::BestFirstSearch;
use wayfind_search::iterative_deepening::IterativeDeepeningSearch;
use wayfind_search::outcome::{ActionPlan, Failure};
use wayfind_search::problem::WithGoal;
use wayfind_search::search::Search;
use wayfind_search::uninformed::{BreadthFirstSearch, DepthFirstSearch, UniformCostSearch};

// ---------------------------------------------------------------------------
// Path graph S0 → S1 → S2 → S3
// ---------------------------------------------------------------------------

#[test]
fn path_graph_is_solved_in_three_steps() {
    let world = PathGraph::new(4);
    let cancel = CancelToken::new();
    let expected = ActionPlan::Actions(vec![1, 2, 3]);

    let mut bfs = BreadthFirstSearch::tree();
    assert_eq!(bfs.find_actions(&world, &cancel), expected);
    assert!((bfs.metrics().path_cost() - 3.0).abs() < f64::EPSILON);

    let mut dfs = DepthFirstSearch::tree();
    assert_eq!(dfs.find_actions(&world, &cancel), expected);
    assert!((dfs.metrics().path_cost() - 3.0).abs() < f64::EPSILON);

    let mut a_star = BestFirstSearch::a_star(ZeroHeuristic, QueueSearchConfig::tree()).unwrap();
    assert_eq!(a_star.find_actions(&world, &cancel), expected);
    assert!((a_star.metrics().path_cost() - 3.0).abs() < f64::EPSILON);
}

#[test]
fn depth_limit_one_cuts_off_the_path_graph() {
    let world = PathGraph::new(4);
    let mut dls = DepthLimitedSearch::new(1);
    assert_eq!(
        dls.find_actions(&world, &CancelToken::new()),
        ActionPlan::Failure(Failure::DepthLimitReached)
    );
}

#[test]
fn unreachable_goal_fails_everywhere() {
    let world = PathGraph::with_unreachable_goal(6);
    let cancel = CancelToken::new();
    let exhausted = ActionPlan::Failure(Failure::Exhausted);

    let mut bfs = BreadthFirstSearch::graph();
    assert_eq!(bfs.find_actions(&world, &cancel), exhausted);
    assert_eq!(bfs.metrics().nodes_expanded(), 6);

    let mut dfs = DepthFirstSearch::graph();
    assert_eq!(dfs.find_actions(&world, &cancel), exhausted);
    assert_eq!(dfs.metrics().nodes_expanded(), 6);

    let mut ucs = UniformCostSearch::graph();
    assert_eq!(ucs.find_actions(&world, &cancel), exhausted);
    assert_eq!(ucs.metrics().nodes_expanded(), 6);

    let mut ids = IterativeDeepeningSearch::new();
    assert_eq!(ids.find_actions(&world, &cancel), exhausted);
    assert_eq!(ids.find_state(&world, &cancel), None);
}

#[test]
fn goal_start_is_a_no_op_for_every_strategy() {
    let world = PathGraph::new(1);
    let cancel = CancelToken::new();

    let plans = [
        BreadthFirstSearch::tree().find_actions(&world, &cancel),
        DepthFirstSearch::tree().find_actions(&world, &cancel),
        UniformCostSearch::tree().find_actions(&world, &cancel),
        DepthLimitedSearch::new(0).find_actions(&world, &cancel),
        IterativeDeepeningSearch::new().find_actions(&world, &cancel),
    ];
    for plan in plans {
        assert_eq!(plan, ActionPlan::NoOp);
    }
}

// ---------------------------------------------------------------------------
// Romania road map
// ---------------------------------------------------------------------------

#[test]
fn a_star_with_straight_line_is_cost_optimal() {
    let world = RouteMap::romania("Arad").unwrap();
    let cancel = CancelToken::new();

    let heuristic = WorldHeuristic::resolve(&world, "straight_line").unwrap();
    let mut a_star = BestFirstSearch::a_star(heuristic, QueueSearchConfig::graph()).unwrap();
    a_star.find_actions(&world, &cancel);

    let mut ucs = UniformCostSearch::graph();
    ucs.find_actions(&world, &cancel);

    assert!((a_star.metrics().path_cost() - 418.0).abs() < f64::EPSILON);
    assert!((ucs.metrics().path_cost() - 418.0).abs() < f64::EPSILON);
    assert!(a_star.metrics().nodes_expanded() < ucs.metrics().nodes_expanded());
}

#[test]
fn greedy_reaches_bucharest_but_not_cheapest() {
    let world = RouteMap::romania("Arad").unwrap();
    let heuristic = WorldHeuristic::resolve(&world, "straight_line").unwrap();
    let mut greedy = BestFirstSearch::greedy(heuristic, QueueSearchConfig::graph()).unwrap();
    let state = greedy.find_state(&world, &CancelToken::new());
    assert_eq!(state, world.city("Bucharest"));
    assert!((greedy.metrics().path_cost() - 450.0).abs() < f64::EPSILON);
}

#[test]
fn replacement_goal_test_redirects_the_search() {
    let world = RouteMap::romania("Arad").unwrap();
    let craiova = world.city("Craiova").unwrap();
    let to_craiova = WithGoal::new(world.clone(), move |city: &usize| *city == craiova);
    let mut ucs = UniformCostSearch::graph();
    assert_eq!(ucs.find_state(&to_craiova, &CancelToken::new()), Some(craiova));
    // Arad → Sibiu → Rimnicu Vilcea → Craiova.
    assert!((ucs.metrics().path_cost() - 366.0).abs() < f64::EPSILON);
}

// ---------------------------------------------------------------------------
// Eight-puzzle
// ---------------------------------------------------------------------------

#[test]
fn three_move_board_by_every_complete_strategy() {
    let world = EightPuzzle::new(Board::three_moves_from_goal());
    let cancel = CancelToken::new();
    let expected = ActionPlan::Actions(vec![Move::Up, Move::Left, Move::Left]);

    assert_eq!(BreadthFirstSearch::graph().find_actions(&world, &cancel), expected);
    assert_eq!(UniformCostSearch::graph().find_actions(&world, &cancel), expected);
    assert_eq!(IterativeDeepeningSearch::new().find_actions(&world, &cancel), expected);
    assert_eq!(DepthLimitedSearch::new(3).find_actions(&world, &cancel), expected);
    for name in ["misplaced_tiles", "manhattan"] {
        let heuristic = WorldHeuristic::resolve(&world, name).unwrap();
        let mut a_star = BestFirstSearch::a_star(heuristic, QueueSearchConfig::graph()).unwrap();
        assert_eq!(a_star.find_actions(&world, &cancel), expected, "{name}");
    }
}

#[test]
fn manhattan_expands_no_more_than_misplaced_tiles() {
    let world = EightPuzzle::new(Board::scrambled());
    let cancel = CancelToken::new();

    let misplaced = WorldHeuristic::resolve(&world, "misplaced_tiles").unwrap();
    let mut with_misplaced =
        BestFirstSearch::a_star(misplaced, QueueSearchConfig::graph()).unwrap();
    let misplaced_plan = with_misplaced.find_actions(&world, &cancel);

    let manhattan = WorldHeuristic::resolve(&world, "manhattan").unwrap();
    let mut with_manhattan =
        BestFirstSearch::a_star(manhattan, QueueSearchConfig::graph()).unwrap();
    let manhattan_plan = with_manhattan.find_actions(&world, &cancel);

    let mut bfs = BreadthFirstSearch::graph();
    let bfs_plan = bfs.find_actions(&world, &cancel);

    // All three are optimal on unit costs.
    assert_eq!(misplaced_plan.actions().len(), bfs_plan.actions().len());
    assert_eq!(manhattan_plan.actions().len(), bfs_plan.actions().len());
    assert!(with_manhattan.metrics().nodes_expanded() <= bfs.metrics().nodes_expanded());
    assert!(with_misplaced.metrics().nodes_expanded() <= bfs.metrics().nodes_expanded());
}

#[test]
fn effective_branch_factor_is_reported_on_success() {
    let world = EightPuzzle::new(Board::scrambled());
    let mut bfs = BreadthFirstSearch::graph();
    bfs.find_actions(&world, &CancelToken::new());
    let ebf = bfs.metrics().effective_branch_factor();
    assert!(ebf > 1.0 && ebf < 3.0, "ebf = {ebf}");
}
