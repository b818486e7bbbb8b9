//! Wayfind Harness: world-level orchestration for the search engine.
//!
//! The harness runs a configured strategy on a world and packages the result
//! as a hashable report that can be persisted and verified offline.
//!
//! The harness does NOT implement search; it delegates to `wayfind-search`.
//! Worlds provide domain data only; the harness owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod config;
pub mod contract;
pub mod hash;
pub mod report;
pub mod report_dir;
pub mod runner;
pub mod worlds;
