//! Shared helpers for lantern benchmark suites.

use lantern_harness::runner::initial_state;
use lantern_kernel::carrier::state::BridgeState;
use lantern_kernel::operators::apply::apply;
use lantern_kernel::operators::crossing::enumerate_crossings;

/// Named instances, smallest first.
pub const INSTANCES: &[(&str, &[i64])] = &[
    ("three", &[1, 2, 5]),
    ("four", &[1, 2, 5, 10]),
    ("classic", &[1, 3, 6, 8, 12]),
    ("six", &[1, 2, 4, 7, 11, 16]),
];

/// Root state for `durations`.
///
/// # Panics
///
/// Panics if `durations` cannot form a roster. Benchmark setup failures are fatal.
#[must_use]
pub fn root(durations: &[i64]) -> BridgeState {
    initial_state(durations).expect("benchmark durations are valid")
}

/// One full expansion: every candidate from `state`, applied.
///
/// # Panics
///
/// Panics if a standard candidate fails to apply.
#[must_use]
pub fn expand(state: &BridgeState) -> Vec<BridgeState> {
    enumerate_crossings(state)
        .into_iter()
        .map(|c| apply(state, c).expect("standard candidates apply"))
        .collect()
}
