//! Lock tests: report directory persistence through the full runner
//! pipeline: run → write directory → read directory → verify.

use wayfind_harness::config::{RunConfig, StrategyKind, VariantKind};
use wayfind_harness::report::RunReport;
use wayfind_harness::report_dir::{read_report_dir, write_report_dir, ReportDirReadError};
use wayfind_harness::runner::run_search;
use wayfind_harness::worlds::path_graph::PathGraph;
use wayfind_harness::worlds::route_map::RouteMap;
use wayfind_search::cancel::CancelToken;

fn reports() -> Vec<RunReport> {
    let cancel = CancelToken::new();
    let romania = RouteMap::romania("Arad").unwrap();
    let path = PathGraph::new(5);
    let dead_end = PathGraph::with_unreachable_goal(5);
    let cancelled = CancelToken::new();
    cancelled.cancel();

    vec![
        run_search(
            &romania,
            &RunConfig::new(StrategyKind::UniformCost).with_variant(VariantKind::Graph),
            &cancel,
        )
        .unwrap(),
        run_search(&PathGraph::new(1), &RunConfig::new(StrategyKind::BreadthFirst), &cancel)
            .unwrap(),
        run_search(
            &path,
            &RunConfig::new(StrategyKind::DepthLimited).with_depth_limit(2),
            &cancel,
        )
        .unwrap(),
        run_search(&dead_end, &RunConfig::new(StrategyKind::DepthFirst), &cancel).unwrap(),
        run_search(&path, &RunConfig::new(StrategyKind::IterativeDeepening), &cancelled).unwrap(),
    ]
}

#[test]
fn every_outcome_round_trips() {
    let mut outcomes = Vec::new();
    for report in reports() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_report_dir(&report, dir.path()).unwrap();
        let loaded = read_report_dir(dir.path()).unwrap();
        assert_eq!(loaded.digest, written);
        assert_eq!(loaded.bytes, report.canonical_bytes().unwrap());
        outcomes.push(loaded.report["outcome"].as_str().unwrap().to_string());
    }
    assert_eq!(
        outcomes,
        vec!["solved", "no_op", "depth_limit_reached", "exhausted", "cancelled"]
    );
}

#[test]
fn rewriting_a_directory_replaces_its_contents() {
    let all = reports();
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&all[0], dir.path()).unwrap();
    let second = write_report_dir(&all[1], dir.path()).unwrap();
    assert_eq!(read_report_dir(dir.path()).unwrap().digest, second);
}

#[test]
fn directory_path_is_not_part_of_the_digest() {
    let report = &reports()[0];
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let nested = b.path().join("deeper").join("still");
    assert_eq!(
        write_report_dir(report, a.path()).unwrap(),
        write_report_dir(report, &nested).unwrap()
    );
}

#[test]
fn swapped_digest_is_rejected() {
    let all = reports();
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    write_report_dir(&all[0], a.path()).unwrap();
    write_report_dir(&all[1], b.path()).unwrap();
    std::fs::copy(b.path().join("run_digest.txt"), a.path().join("run_digest.txt")).unwrap();
    let err = read_report_dir(a.path()).unwrap_err();
    assert!(matches!(err, ReportDirReadError::DigestMismatch { .. }), "{err}");
}

#[test]
fn empty_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_report_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ReportDirReadError::MissingFile { .. }), "{err}");
}
