//! World implementations for the harness runner.

pub mod eight_puzzle;
pub mod path_graph;
pub mod route_map;
