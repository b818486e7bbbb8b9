//! Lock tests: run reports are deterministic and their digests bind every
//! reported field.

use wayfind_harness::canon::canonical_json_bytes;
use wayfind_harness::config::{RunConfig, StrategyKind, VariantKind};
use wayfind_harness::hash::{canonical_hash, DOMAIN_RUN_REPORT};
use wayfind_harness::report::RunReport;
use wayfind_harness::runner::run_search;
use wayfind_harness::worlds::eight_puzzle::{Board, EightPuzzle};
use wayfind_harness::worlds::route_map::RouteMap;
use wayfind_search::cancel::CancelToken;

fn romania_a_star() -> RunReport {
    let world = RouteMap::romania("Arad").unwrap();
    let config = RunConfig::new(StrategyKind::AStar)
        .with_variant(VariantKind::Graph)
        .with_heuristic("straight_line");
    run_search(&world, &config, &CancelToken::new()).unwrap()
}

#[test]
fn repeated_runs_produce_identical_bytes() {
    let first = romania_a_star();
    for _ in 0..10 {
        let again = romania_a_star();
        assert_eq!(again.canonical_bytes().unwrap(), first.canonical_bytes().unwrap());
        assert_eq!(again.digest().unwrap(), first.digest().unwrap());
    }
}

#[test]
fn digest_is_domain_separated_sha256_of_canonical_bytes() {
    let report = romania_a_star();
    let bytes = report.canonical_bytes().unwrap();
    let digest = report.digest().unwrap();
    assert_eq!(digest, canonical_hash(DOMAIN_RUN_REPORT, &bytes));
    assert_eq!(digest.algorithm(), "sha256");
    assert_eq!(digest.hex_digest().len(), 64);
}

#[test]
fn canonical_bytes_are_a_fixed_point() {
    let bytes = romania_a_star().canonical_bytes().unwrap();
    let reparsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(canonical_json_bytes(&reparsed).unwrap(), bytes);
}

#[test]
fn reals_are_rendered_as_fixed_decimal_strings() {
    let value = romania_a_star().to_json_value().unwrap();
    assert_eq!(value["metrics"]["pathCost"], "418.000000");
    assert!(value["metrics"]["effectiveBranchFactor"].is_string());
    assert!(value["metrics"]["nodesExpanded"].is_u64());
}

#[test]
fn different_strategies_produce_different_digests() {
    let world = EightPuzzle::new(Board::three_moves_from_goal());
    let cancel = CancelToken::new();
    let configs = [
        RunConfig::new(StrategyKind::BreadthFirst),
        RunConfig::new(StrategyKind::BreadthFirst).with_variant(VariantKind::Graph),
        RunConfig::new(StrategyKind::IterativeDeepening),
        RunConfig::new(StrategyKind::AStar).with_heuristic("manhattan"),
        RunConfig::new(StrategyKind::AStar).with_heuristic("misplaced_tiles"),
    ];
    let mut digests: Vec<String> = configs
        .iter()
        .map(|config| {
            let report = run_search(&world, config, &cancel).unwrap();
            report.digest().unwrap().as_str().to_string()
        })
        .collect();
    digests.sort();
    digests.dedup();
    assert_eq!(digests.len(), configs.len());
}
