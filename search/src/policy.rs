//! Search policy types.

use crate::heuristic::HeuristicKind;

/// Per-run search configuration.
///
/// There are no budgets: a search runs until it pops a goal or empties its
/// frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Heuristic used for every node of the run.
    pub heuristic: HeuristicKind,
    /// Record one `ExploreEvent` per loop iteration in the search graph.
    pub record_events: bool,
}

impl SearchPolicy {
    #[must_use]
    pub fn with_heuristic(heuristic: HeuristicKind) -> Self {
        Self {
            heuristic,
            ..Self::default()
        }
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            heuristic: HeuristicKind::RemainingCount,
            record_events: true,
        }
    }
}
