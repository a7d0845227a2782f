//! Search nodes, the run-scoped node arena, and the frontier ordering key.

use lantern_kernel::carrier::state::BridgeState;
use lantern_kernel::operators::crossing::Crossing;
use lantern_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_BRIDGE_STATE};

/// Move description carried by the root node.
pub const ROOT_DESCRIPTION: &str = "starting state";

/// An immutable search node.
///
/// `h_cost` and therefore `f_cost` are fixed when the node is created.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Arena index; also the node's frontier insertion order.
    pub node_id: u64,
    /// Parent node ID (`None` for root).
    pub parent_id: Option<u64>,
    /// Configuration at this node.
    pub state: BridgeState,
    /// Heuristic estimate at creation time.
    pub h_cost: i64,
    /// The crossing that produced this node from its parent.
    pub producing_crossing: Option<Crossing>,
    pub move_description: String,
}

impl SearchNode {
    /// Accumulated crossing cost (`g`).
    #[must_use]
    pub fn g_cost(&self) -> i64 {
        self.state.accumulated_cost()
    }

    /// `f_cost = g_cost + h_cost` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.g_cost().saturating_add(self.h_cost)
    }

    #[must_use]
    pub fn frontier_key(&self) -> FrontierKey {
        FrontierKey {
            f_cost: self.f_cost(),
            creation_order: self.node_id,
        }
    }
}

/// Fingerprint of a state's canonical identity bytes.
#[must_use]
pub fn state_fingerprint(state: &BridgeState) -> ContentHash {
    canonical_hash(DOMAIN_BRIDGE_STATE, &state.identity_bytes())
}

/// Owner of every node created during one search.
///
/// Nodes are appended and never removed, so any ancestor of any node stays
/// reachable until the arena is dropped.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its id.
    pub fn insert(
        &mut self,
        parent_id: Option<u64>,
        state: BridgeState,
        h_cost: i64,
        producing_crossing: Option<Crossing>,
        move_description: String,
    ) -> u64 {
        let node_id = self.nodes.len() as u64;
        self.nodes.push(SearchNode {
            node_id,
            parent_id,
            state,
            h_cost,
            producing_crossing,
            move_description,
        });
        node_id
    }

    #[must_use]
    pub fn get(&self, node_id: u64) -> Option<&SearchNode> {
        usize::try_from(node_id)
            .ok()
            .and_then(|idx| self.nodes.get(idx))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.iter()
    }
}

/// The frontier ordering key: `(f_cost, creation_order)`.
///
/// Lower `f_cost` first; ties go to the node inserted earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: i64,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
