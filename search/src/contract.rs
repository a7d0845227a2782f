//! Search world contract trait.

use lantern_kernel::carrier::state::BridgeState;
use lantern_kernel::operators::crossing::{enumerate_crossings, Crossing};

/// Trait for worlds the search can run in.
///
/// # Contract
///
/// - Enumeration must be deterministic: same state → same crossings in the
///   same order.
/// - Every crossing must be applicable to the state it was enumerated from;
///   a crossing that fails to apply ends the search with
///   `TerminationReason::WorldContractViolation`.
pub trait CrossingWorld {
    /// Unique world identifier, echoed into the search graph.
    fn world_id(&self) -> &str;

    /// Enumerate the crossings available from `state`, in order.
    fn enumerate_crossings(&self, state: &BridgeState) -> Vec<Crossing>;

    /// Test whether `state` is terminal.
    fn is_goal(&self, state: &BridgeState) -> bool;
}

/// The standard puzzle: any one or two members on the light's bank may
/// cross, and the goal is an empty origin bank.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanternBridge;

impl CrossingWorld for LanternBridge {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "lantern_bridge"
    }

    fn enumerate_crossings(&self, state: &BridgeState) -> Vec<Crossing> {
        enumerate_crossings(state)
    }

    fn is_goal(&self, state: &BridgeState) -> bool {
        state.is_complete()
    }
}
