//! Heuristic strategies producing the `h` component of `f = g + h`.
//!
//! A strategy is chosen once per run through [`HeuristicKind`] and never
//! changes mid-search. Not every strategy is admissible.

use std::str::FromStr;

use lantern_kernel::carrier::member::Member;
use lantern_kernel::carrier::state::{BridgeState, Side};

/// Estimate of the remaining cost from a state.
pub trait Heuristic: Send + Sync {
    /// Estimated remaining cost `h` for `state`.
    fn estimate(&self, state: &BridgeState) -> i64;
}

/// `h` = number of members still on the origin bank.
#[derive(Debug, Clone, Copy)]
pub struct RemainingCount;

impl Heuristic for RemainingCount {
    fn estimate(&self, state: &BridgeState) -> i64 {
        as_i64(state.origin().len())
    }
}

/// `h` = `2N - 3 - moves`, the classic bound on crossings still needed.
#[derive(Debug, Clone, Copy)]
pub struct RemainingMoves;

impl Heuristic for RemainingMoves {
    fn estimate(&self, state: &BridgeState) -> i64 {
        as_i64(state.member_count())
            .saturating_mul(2)
            .saturating_sub(3)
            .saturating_sub(i64::from(state.move_count()))
    }
}

/// Bound from relaxing the two-person capacity limit.
///
/// Twice the slowest origin member; with the light on the destination side
/// this is halved and the fastest destination member's return is added.
/// With at most two members left on origin, `h` is just the slowest of them.
#[derive(Debug, Clone, Copy)]
pub struct UnboundedCapacity;

impl Heuristic for UnboundedCapacity {
    fn estimate(&self, state: &BridgeState) -> i64 {
        let slowest = state
            .origin()
            .iter()
            .map(Member::duration)
            .max()
            .unwrap_or(0);

        if state.origin().len() <= 2 {
            return slowest;
        }

        let mut h = slowest.saturating_mul(2);
        if state.light() == Side::Destination {
            let fastest_back = state
                .destination()
                .iter()
                .map(Member::duration)
                .min()
                .unwrap_or(0);
            h = (h / 2).saturating_add(fastest_back);
        }
        h
    }
}

/// Named heuristic selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeuristicKind {
    #[default]
    RemainingCount,
    RemainingMoves,
    UnboundedCapacity,
}

impl HeuristicKind {
    pub const ALL: [Self; 3] = [
        Self::RemainingCount,
        Self::RemainingMoves,
        Self::UnboundedCapacity,
    ];

    /// The strategy implementing this selector.
    #[must_use]
    pub fn strategy(self) -> &'static dyn Heuristic {
        match self {
            Self::RemainingCount => &RemainingCount,
            Self::RemainingMoves => &RemainingMoves,
            Self::UnboundedCapacity => &UnboundedCapacity,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RemainingCount => "remaining-count",
            Self::RemainingMoves => "remaining-moves",
            Self::UnboundedCapacity => "unbounded-capacity",
        }
    }
}

impl std::fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown heuristic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeuristic {
    pub name: String,
}

impl std::fmt::Display for UnknownHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown heuristic {:?} (expected one of: remaining-count, remaining-moves, unbounded-capacity)",
            self.name
        )
    }
}

impl std::error::Error for UnknownHeuristic {}

impl FromStr for HeuristicKind {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownHeuristic { name: s.into() })
    }
}

fn as_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
