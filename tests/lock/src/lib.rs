//! Shared helpers for the lock tests.

pub mod path_checks;
pub mod worlds;
