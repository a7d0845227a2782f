//! `SearchGraph`: per-iteration audit log of a search run.
//!
//! The normative surface is the ordered list of [`ExploreEvent`]s, one per
//! frontier pop, plus aggregate metadata. Two runs with the same input and
//! heuristic produce byte-identical JSON.

use lantern_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_GRAPH};

use crate::heuristic::HeuristicKind;

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraph {
    /// One event per loop iteration, in pop order. Empty when the policy
    /// disables event recording.
    pub events: Vec<ExploreEvent>,
    pub metadata: SearchGraphMetadata,
}

/// A single frontier pop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreEvent {
    /// Zero-based pop order.
    pub exploration_order: u64,
    pub node_id: u64,
    /// Hex fingerprint of the popped node's state.
    pub state_fingerprint: String,
    pub f_cost: i64,
    pub outcome: ExploreOutcome,
}

/// What happened to a popped node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreOutcome {
    /// The node satisfied the goal test; the search stopped.
    Goal,
    /// First time this configuration was popped; children were pushed.
    Expanded { children: u64 },
    /// The configuration was already in the closed set.
    DuplicateSkipped,
}

/// Counters observed by the caller.
///
/// `expansions` counts non-duplicate expansions, `explorations` counts loop
/// iterations that did not end the search. Every counter is zero after a
/// run that did not reach a goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expansions: u64,
    pub explorations: u64,
    pub duplicates_skipped: u64,
    pub candidates_generated: u64,
    pub frontier_high_water: u64,
}

/// Aggregate metadata.
#[derive(Debug, Clone)]
pub struct SearchGraphMetadata {
    pub world_id: String,
    pub heuristic: HeuristicKind,
    pub member_count: u64,
    pub root_state_fingerprint: String,
    pub stats: SearchStats,
    pub termination_reason: TerminationReason,
}

/// Why the search terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal node was popped.
    GoalReached { node_id: u64 },
    /// Frontier emptied without finding a goal.
    FrontierExhausted,
    /// The world enumerated a crossing that could not be applied.
    WorldContractViolation { detail: String },
    /// Frontier emptied after crossings were dropped because their cost
    /// would pass `i64::MAX`.
    CostOverflow { pruned_crossings: u64 },
    /// A frontier key referred to a node missing from the arena.
    FrontierInvariantViolation,
}

// ---------------------------------------------------------------------------
// JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraph {
    /// Serialize the graph to compact JSON bytes with sorted object keys.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }

    /// Content hash of [`SearchGraph::to_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        Ok(canonical_hash(DOMAIN_SEARCH_GRAPH, &self.to_json_bytes()?))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "events": self.events.iter().map(event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
        })
    }
}

fn event_to_json(e: &ExploreEvent) -> serde_json::Value {
    serde_json::json!({
        "exploration_order": e.exploration_order,
        "f_cost": e.f_cost,
        "node_id": e.node_id,
        "outcome": outcome_to_json(e.outcome),
        "state_fingerprint": e.state_fingerprint,
    })
}

fn outcome_to_json(o: ExploreOutcome) -> serde_json::Value {
    match o {
        ExploreOutcome::Goal => serde_json::json!({"type": "goal"}),
        ExploreOutcome::Expanded { children } => {
            serde_json::json!({"children": children, "type": "expanded"})
        }
        ExploreOutcome::DuplicateSkipped => serde_json::json!({"type": "duplicate_skipped"}),
    }
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "heuristic": m.heuristic.as_str(),
        "member_count": m.member_count,
        "root_state_fingerprint": m.root_state_fingerprint,
        "termination_reason": termination_reason_to_json(&m.termination_reason),
        "total_candidates_generated": m.stats.candidates_generated,
        "total_duplicates_skipped": m.stats.duplicates_skipped,
        "total_expansions": m.stats.expansions,
        "total_explorations": m.stats.explorations,
        "frontier_high_water": m.stats.frontier_high_water,
        "world_id": m.world_id,
    })
}

fn termination_reason_to_json(r: &TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": "goal_reached"})
        }
        TerminationReason::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
        TerminationReason::WorldContractViolation { detail } => {
            serde_json::json!({"detail": detail, "type": "world_contract_violation"})
        }
        TerminationReason::CostOverflow { pruned_crossings } => {
            serde_json::json!({"pruned_crossings": pruned_crossings, "type": "cost_overflow"})
        }
        TerminationReason::FrontierInvariantViolation => {
            serde_json::json!({"type": "frontier_invariant_violation"})
        }
    }
}
