//! Path reconstruction from a goal node back to the root.

use lantern_kernel::carrier::member::Member;
use lantern_kernel::carrier::state::Side;
use lantern_kernel::operators::crossing::Crossing;

use crate::node::{NodeArena, SearchNode};

/// One step of a solution path, root first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub node_id: u64,
    pub move_description: String,
    /// Crossing that produced this step; `None` for the root.
    pub crossing: Option<Crossing>,
    /// Origin bank snapshot after this step.
    pub origin: Vec<Member>,
    /// Destination bank snapshot after this step.
    pub destination: Vec<Member>,
    pub light: Side,
    pub accumulated_cost: i64,
    pub move_count: u32,
    /// Evaluation score `f` fixed at node creation.
    pub f_cost: i64,
}

impl From<&SearchNode> for PathEntry {
    fn from(node: &SearchNode) -> Self {
        Self {
            node_id: node.node_id,
            move_description: node.move_description.clone(),
            crossing: node.producing_crossing,
            origin: node.state.origin().to_vec(),
            destination: node.state.destination().to_vec(),
            light: node.state.light(),
            accumulated_cost: node.state.accumulated_cost(),
            move_count: node.state.move_count(),
            f_cost: node.f_cost(),
        }
    }
}

/// Reconstruct the path from the root to `goal_node_id`.
///
/// Follows parent links without touching any node. For a goal with
/// `move_count = m` the path has `m + 1` entries. An id missing from the
/// arena yields an empty path.
#[must_use]
pub fn reconstruct_path(nodes: &NodeArena, goal_node_id: u64) -> Vec<PathEntry> {
    let mut path = Vec::new();
    let mut current_id = Some(goal_node_id);

    while let Some(id) = current_id {
        let Some(node) = nodes.get(id) else {
            break;
        };
        path.push(PathEntry::from(node));
        current_id = node.parent_id;
    }

    path.reverse();
    path
}
