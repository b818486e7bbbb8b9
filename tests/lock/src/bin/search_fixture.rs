//! Binary that runs fixed search scenarios through the harness runner and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: `<scenario>.<key>=<value>` lines (see source for format).

use wayfind_harness::config::{RunConfig, StrategyKind, VariantKind};
use wayfind_harness::contract::SearchWorld;
use wayfind_harness::runner::run_search;
use wayfind_harness::worlds::eight_puzzle::{Board, EightPuzzle};
use wayfind_harness::worlds::route_map::RouteMap;
use wayfind_search::cancel::CancelToken;

fn print_run<W: SearchWorld>(scenario: &str, world: &W, config: &RunConfig) {
    let report = run_search(world, config, &CancelToken::new()).expect("search run failed");
    let digest = report.digest().expect("report digest failed");
    let value = report.to_json_value().expect("report JSON failed");
    let config_digest = value["config_digest"]
        .as_str()
        .expect("missing config_digest");

    println!("{scenario}.report_digest={digest}");
    println!("{scenario}.config_digest={config_digest}");
    println!("{scenario}.outcome={}", report.outcome.as_str());
    println!("{scenario}.actions={}", report.actions.join(","));
    println!("{scenario}.nodes_expanded={}", report.metrics.nodes_expanded());
    println!("{scenario}.max_queue_size={}", report.metrics.max_queue_size());
    println!("{scenario}.path_cost={}", value["metrics"]["pathCost"]);
}

fn main() {
    let romania = RouteMap::romania("Arad").expect("Arad is on the map");
    print_run(
        "route_map_a_star",
        &romania,
        &RunConfig::new(StrategyKind::AStar)
            .with_variant(VariantKind::Graph)
            .with_heuristic("straight_line"),
    );

    let puzzle = EightPuzzle::new(Board::scrambled());
    print_run(
        "eight_puzzle_a_star",
        &puzzle,
        &RunConfig::new(StrategyKind::AStar)
            .with_variant(VariantKind::Graph)
            .with_heuristic("manhattan"),
    );
    print_run(
        "eight_puzzle_iterative_deepening",
        &EightPuzzle::new(Board::three_moves_from_goal()),
        &RunConfig::new(StrategyKind::IterativeDeepening),
    );
}
