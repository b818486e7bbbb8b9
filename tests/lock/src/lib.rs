//! Shared fixtures for the lock tests.

pub mod random_graph;
