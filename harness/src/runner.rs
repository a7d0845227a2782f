//! Harness runner: builds a run's roster and root state, drives the engine,
//! and packages the outcome as a [`RunReport`].
//!
//! # Pipeline
//!
//! ```text
//! RunConfig → MemberIdAllocator::new() → Roster::allocate()
//!   → BridgeState::initial() → search(LanternBridge) → reconstruct path
//! ```
//!
//! Every run gets a fresh id allocator, so member ids always start at 1 and
//! two runs in the same process never interfere.

use std::time::{Duration, Instant};

use lantern_kernel::carrier::member::{CarrierError, MemberIdAllocator, Roster};
use lantern_kernel::carrier::state::BridgeState;
use lantern_search::contract::LanternBridge;
use lantern_search::error::SearchError;
use lantern_search::graph::{SearchGraph, SearchStats, TerminationReason};
use lantern_search::heuristic::HeuristicKind;
use lantern_search::path::PathEntry;
use lantern_search::search::{search, SearchOutcome};
use tracing::{info, warn};

use crate::config::RunConfig;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The durations could not form a roster.
    InvalidInput(CarrierError),
    /// The engine refused to start.
    Search(SearchError),
    /// The frontier was exhausted without reaching a goal.
    NoSolution,
    /// Every route to the goal costs more than `i64::MAX`.
    CostOverflow,
    /// The engine stopped on an internal failure before reaching a goal.
    Aborted { detail: String },
    /// The configuration could not be read or parsed.
    ConfigParse { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid input: {e}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::NoSolution => write!(f, "no solution found"),
            Self::CostOverflow => write!(f, "accumulated cost overflowed"),
            Self::Aborted { detail } => write!(f, "search aborted: {detail}"),
            Self::ConfigParse { detail } => write!(f, "config error: {detail}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::NoSolution
            | Self::CostOverflow
            | Self::Aborted { .. }
            | Self::ConfigParse { .. } => None,
        }
    }
}

impl From<CarrierError> for RunError {
    fn from(e: CarrierError) -> Self {
        Self::InvalidInput(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunReport {
    pub heuristic: HeuristicKind,
    /// Accumulated cost of the goal.
    pub total_cost: i64,
    pub stats: SearchStats,
    /// Root-to-goal path, root first.
    pub path: Vec<PathEntry>,
    pub graph: SearchGraph,
    /// Wall-clock time spent inside the engine.
    pub elapsed: Duration,
}

impl RunReport {
    /// Number of crossings on the solution path.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.path.last().map_or(0, |e| e.move_count)
    }
}

/// Build the root state for `durations` with a fresh id allocator.
///
/// # Errors
///
/// Returns [`RunError::InvalidInput`] if `durations` is empty or holds a
/// non-positive value.
pub fn initial_state(durations: &[i64]) -> Result<BridgeState, RunError> {
    let mut ids = MemberIdAllocator::new();
    let roster = Roster::allocate(&mut ids, durations)?;
    Ok(BridgeState::initial(&roster))
}

/// Run one search as described by `config`.
///
/// # Errors
///
/// Returns [`RunError::InvalidInput`] for bad durations,
/// [`RunError::NoSolution`] if the engine exhausts its frontier,
/// [`RunError::CostOverflow`] if only overflowing routes remained, and
/// [`RunError::Aborted`] for any other early stop.
pub fn run(config: &RunConfig) -> Result<RunReport, RunError> {
    let root = initial_state(&config.durations)?;
    let policy = config.search_policy();

    info!(
        event = "run_start",
        heuristic = %config.heuristic,
        members = config.durations.len(),
    );

    let started = Instant::now();
    let result = search(root, &LanternBridge, &policy)?;
    let elapsed = started.elapsed();

    let total_cost = match result.outcome() {
        SearchOutcome::GoalFound(goal) => goal.g_cost(),
        SearchOutcome::Exhausted => {
            let reason = &result.graph.metadata.termination_reason;
            warn!(event = "run_end", termination = ?reason, "no goal reached");
            return Err(match reason {
                TerminationReason::CostOverflow { .. } => RunError::CostOverflow,
                TerminationReason::WorldContractViolation { detail } => RunError::Aborted {
                    detail: detail.clone(),
                },
                TerminationReason::FrontierInvariantViolation => RunError::Aborted {
                    detail: "frontier key without a node".into(),
                },
                TerminationReason::FrontierExhausted | TerminationReason::GoalReached { .. } => {
                    RunError::NoSolution
                }
            });
        }
    };
    let path = result.solution()?;

    info!(
        event = "run_end",
        total_cost,
        expansions = result.stats.expansions,
        explorations = result.stats.explorations,
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
    );

    Ok(RunReport {
        heuristic: config.heuristic,
        total_cost,
        stats: result.stats,
        path,
        graph: result.graph,
        elapsed,
    })
}
