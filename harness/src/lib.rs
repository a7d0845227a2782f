//! Lantern Harness: run-level orchestration for the search engine.
//!
//! The harness turns a [`config::RunConfig`] into a roster and a root state,
//! runs the engine under the standard bridge world, and renders the result.
//! It does NOT implement search logic; that lives in `lantern_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod render;
pub mod runner;
