//! Wayfind Search: generic state-space search over abstract problems.
//!
//! A [`problem::Problem`] supplies an initial state, the applicable actions,
//! a transition function, step costs, and a goal test. Strategies implement
//! [`search::Search`] and return a goal node, an action plan, or a goal state,
//! together with per-invocation [`metrics::Metrics`].
//!
//! # Module layering
//!
//! ```text
//! problem, node  ←  expander  ←  frontier, evaluation  ←  queue_search
//!                                                           ↑
//!        uninformed, informed, depth_limited  ←  iterative_deepening
//! ```
//!
//! # Strategies
//!
//! - [`uninformed::BreadthFirstSearch`], [`uninformed::DepthFirstSearch`],
//!   [`uninformed::UniformCostSearch`]: FIFO, LIFO, and path-cost frontiers
//! - [`informed::BestFirstSearch`]: greedy (`f = h`) and A* (`f = g + h`)
//! - [`depth_limited::DepthLimitedSearch`]: recursive, three-valued outcome
//! - [`iterative_deepening::IterativeDeepeningSearch`]: growing depth bound
//!
//! Every queue strategy runs as a tree search or a graph search
//! ([`config::SearchVariant`]). Long runs are stopped cooperatively through a
//! [`cancel::CancelToken`].

#![forbid(unsafe_code)]

pub mod branching;
pub mod cancel;
pub mod config;
pub mod depth_limited;
pub mod error;
pub mod evaluation;
pub mod expander;
pub mod frontier;
pub mod informed;
pub mod iterative_deepening;
pub mod metrics;
pub mod node;
pub mod outcome;
pub mod problem;
pub mod queue_search;
pub mod search;
pub mod uninformed;
