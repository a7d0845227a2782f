//! Search entry point and expansion loop.
//!
//! # Loop
//!
//! ```text
//! frontier = {root}; closed = {}
//! while let Some(node) = frontier.pop():
//!     if is_goal(node): stop (GoalReached)
//!     if closed.insert(key(node)): push every child; expansions += 1
//!     explorations += 1
//! stop (FrontierExhausted); every counter reset to zero
//! ```
//!
//! The goal test runs on pop, before any closed-set insertion, so the goal
//! node itself is never counted as an exploration.
//!
//! A child whose cost would pass `i64::MAX` is dropped. If the frontier then
//! runs dry, the search ends with [`TerminationReason::CostOverflow`] rather
//! than `FrontierExhausted`.

use lantern_kernel::carrier::state::BridgeState;
use lantern_kernel::operators::apply::{apply, ApplyFailure};
use lantern_kernel::operators::crossing::describe;
use tracing::{debug, info, trace};

use crate::contract::CrossingWorld;
use crate::error::SearchError;
use crate::frontier::{BestFirstFrontier, ClosedSet};
use crate::graph::{
    ExploreEvent, ExploreOutcome, SearchGraph, SearchGraphMetadata, SearchStats, TerminationReason,
};
use crate::node::{state_fingerprint, NodeArena, SearchNode, ROOT_DESCRIPTION};
use crate::path::{reconstruct_path, PathEntry};
use crate::policy::SearchPolicy;

/// Result of a search execution.
///
/// Always carries the full node arena and a `SearchGraph`, however the
/// search ended. Use [`SearchResult::outcome`] to branch on success.
#[derive(Debug)]
pub struct SearchResult {
    /// The goal node id (if found).
    pub goal_node_id: Option<u64>,
    /// Counters as reported to the caller (all zero unless a goal was found).
    pub stats: SearchStats,
    pub graph: SearchGraph,
    /// Every node created during the search, indexed by `node_id`.
    pub nodes: NodeArena,
}

/// Borrowed view of how a search ended.
#[derive(Debug)]
pub enum SearchOutcome<'a> {
    GoalFound(&'a SearchNode),
    Exhausted,
}

impl SearchResult {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.graph.metadata.termination_reason,
            TerminationReason::GoalReached { .. }
        )
    }

    #[must_use]
    pub fn outcome(&self) -> SearchOutcome<'_> {
        match self.goal_node() {
            Some(node) => SearchOutcome::GoalFound(node),
            None => SearchOutcome::Exhausted,
        }
    }

    #[must_use]
    pub fn goal_node(&self) -> Option<&SearchNode> {
        self.goal_node_id.and_then(|id| self.nodes.get(id))
    }

    /// Accumulated cost of the goal, if one was reached.
    #[must_use]
    pub fn total_cost(&self) -> Option<i64> {
        self.goal_node().map(SearchNode::g_cost)
    }

    /// The root-to-goal path.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnreachableGoal`] if no goal was reached.
    pub fn solution(&self) -> Result<Vec<PathEntry>, SearchError> {
        let goal = self.goal_node_id.ok_or(SearchError::UnreachableGoal)?;
        Ok(reconstruct_path(&self.nodes, goal))
    }
}

/// Run best-first search from `root`.
///
/// Runs to completion: there are no budgets, and the only way out of the
/// loop is popping a goal or emptying the frontier (or a world handing out
/// a crossing that does not apply).
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] if `root` has no members. No
/// `SearchGraph` is produced in this case because no search steps were taken.
pub fn search(
    root: BridgeState,
    world: &dyn CrossingWorld,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    if root.member_count() == 0 {
        return Err(SearchError::InvalidInput {
            detail: "root state has no members".into(),
        });
    }

    let heuristic = policy.heuristic.strategy();
    let member_count = root.member_count() as u64;
    let root_fp_hex = state_fingerprint(&root).hex_digest();

    info!(
        event = "search_start",
        world = world.world_id(),
        heuristic = %policy.heuristic,
        members = member_count,
    );

    let mut nodes = NodeArena::new();
    let mut frontier = BestFirstFrontier::new();
    let mut closed = ClosedSet::new();
    let mut events: Vec<ExploreEvent> = Vec::new();
    let mut stats = SearchStats::default();
    let mut overflow_pruned = 0u64;

    let root_h = heuristic.estimate(&root);
    let root_id = nodes.insert(None, root, root_h, None, ROOT_DESCRIPTION.into());
    if let Some(node) = nodes.get(root_id) {
        frontier.push(node.frontier_key());
    }

    let termination_reason = loop {
        let Some(key) = frontier.pop() else {
            if overflow_pruned > 0 {
                break TerminationReason::CostOverflow {
                    pruned_crossings: overflow_pruned,
                };
            }
            break TerminationReason::FrontierExhausted;
        };
        let Some(current) = nodes.get(key.creation_order) else {
            break TerminationReason::FrontierInvariantViolation;
        };
        let current_id = current.node_id;
        let exploration_order = stats.explorations;
        let fingerprint = if policy.record_events {
            state_fingerprint(&current.state).hex_digest()
        } else {
            String::new()
        };

        if world.is_goal(&current.state) {
            if policy.record_events {
                events.push(ExploreEvent {
                    exploration_order,
                    node_id: current_id,
                    state_fingerprint: fingerprint,
                    f_cost: key.f_cost,
                    outcome: ExploreOutcome::Goal,
                });
            }
            break TerminationReason::GoalReached {
                node_id: current_id,
            };
        }

        let outcome = if closed.insert(current.state.key()) {
            let crossings = world.enumerate_crossings(&current.state);
            stats.candidates_generated += crossings.len() as u64;

            let toward = current.state.light().opposite();
            let mut children = Vec::with_capacity(crossings.len());
            let mut failure = None;
            for crossing in crossings {
                match apply(&current.state, crossing) {
                    Ok(child) => {
                        let h = heuristic.estimate(&child);
                        children.push((child, h, crossing));
                    }
                    Err(ApplyFailure::CostOverflow) => {
                        // No representable solution runs through this child.
                        overflow_pruned += 1;
                    }
                    Err(fail) => {
                        failure = Some(TerminationReason::WorldContractViolation {
                            detail: format!("crossing {crossing:?} rejected: {fail}"),
                        });
                        break;
                    }
                }
            }
            if let Some(reason) = failure {
                break reason;
            }

            let child_count = children.len() as u64;
            for (child, h, crossing) in children {
                let id = nodes.insert(
                    Some(current_id),
                    child,
                    h,
                    Some(crossing),
                    describe(crossing, toward),
                );
                if let Some(node) = nodes.get(id) {
                    frontier.push(node.frontier_key());
                }
            }
            stats.expansions += 1;
            trace!(
                event = "expand",
                node_id = current_id,
                f_cost = key.f_cost,
                children = child_count,
                frontier = frontier.len(),
            );
            ExploreOutcome::Expanded {
                children: child_count,
            }
        } else {
            stats.duplicates_skipped += 1;
            ExploreOutcome::DuplicateSkipped
        };

        if policy.record_events {
            events.push(ExploreEvent {
                exploration_order,
                node_id: current_id,
                state_fingerprint: fingerprint,
                f_cost: key.f_cost,
                outcome,
            });
        }
        stats.explorations += 1;
    };

    stats.frontier_high_water = frontier.high_water();

    let goal_node_id = match termination_reason {
        TerminationReason::GoalReached { node_id } => Some(node_id),
        _ => {
            debug!(
                event = "search_failed",
                expansions = stats.expansions,
                explorations = stats.explorations,
                "resetting counters"
            );
            stats = SearchStats::default();
            None
        }
    };

    info!(
        event = "search_end",
        termination = ?termination_reason,
        expansions = stats.expansions,
        explorations = stats.explorations,
        nodes = nodes.len(),
    );

    let graph = SearchGraph {
        events,
        metadata: SearchGraphMetadata {
            world_id: world.world_id().to_string(),
            heuristic: policy.heuristic,
            member_count,
            root_state_fingerprint: root_fp_hex,
            stats,
            termination_reason,
        },
    };

    Ok(SearchResult {
        goal_node_id,
        stats,
        graph,
        nodes,
    })
}
