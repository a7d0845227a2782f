//! Test-only crossing worlds that restrict the standard candidates.

use lantern_kernel::carrier::state::{BridgeState, Side};
use lantern_kernel::operators::crossing::{enumerate_crossings, Crossing};
use lantern_search::contract::CrossingWorld;

/// Standard crossings toward the destination, none back.
///
/// Any instance with more than two members is unsolvable here, so the
/// search must exhaust its frontier.
pub struct OneWayBridge;

impl CrossingWorld for OneWayBridge {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "one_way_bridge"
    }

    fn enumerate_crossings(&self, state: &BridgeState) -> Vec<Crossing> {
        if state.light() == Side::Origin {
            enumerate_crossings(state)
        } else {
            Vec::new()
        }
    }

    fn is_goal(&self, state: &BridgeState) -> bool {
        state.is_complete()
    }
}

/// Standard crossings, but every state counts as a goal.
pub struct AnyStateIsGoal;

impl CrossingWorld for AnyStateIsGoal {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "any_state_is_goal"
    }

    fn enumerate_crossings(&self, state: &BridgeState) -> Vec<Crossing> {
        enumerate_crossings(state)
    }

    fn is_goal(&self, _state: &BridgeState) -> bool {
        true
    }
}
