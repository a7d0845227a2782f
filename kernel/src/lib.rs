//! Lantern Kernel: members, bridge states, and the crossing transition model.
//!
//! # API Surface
//!
//! - [`carrier::member::Roster`] -- validate crossing durations into a member set
//! - [`carrier::state::BridgeState::initial`] -- the root configuration
//! - [`operators::crossing::enumerate_crossings`] -- legal moves from a state
//! - [`operators::apply::apply`] -- apply a crossing, producing the child state
//! - [`proof::hash::canonical_hash`] -- domain-separated state fingerprints
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators`, `carrier` ← `proof`
//!
//! One-way only. `carrier` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
