//! Lantern Search: deterministic best-first search over bridge states.
//!
//! This crate provides the search layer. It depends only on
//! `lantern_kernel` — it does NOT depend on `lantern_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! lantern_kernel  ←  lantern_search  ←  lantern_harness
//! (members, moves)   (frontier, nodes)   (config, runner, render)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchNode`] — immutable arena-owned node with parent back-link
//! - [`node::NodeArena`] — run-scoped store owning every node of a search
//! - [`frontier::BestFirstFrontier`] — lowest-`f` first, ties in insertion order
//! - [`frontier::ClosedSet`] — structural dedup of expanded configurations
//! - [`heuristic::Heuristic`] — `h` estimate strategy, picked once per run
//! - [`contract::CrossingWorld`] — candidate enumeration and goal test
//! - [`graph::SearchGraph`] — per-iteration audit trail
//! - [`path::reconstruct_path`] — goal-to-root walk, returned root-first

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;
