//! Best-first frontier and the closed set of expanded configurations.
//!
//! The frontier stores only [`FrontierKey`]s; nodes live in the
//! [`crate::node::NodeArena`]. Pushing never deduplicates: a configuration
//! reached along several paths sits in the frontier once per path, and the
//! stale copies are discarded one by one when popped against the closed set.
//!
//! The closed set is a `BTreeSet` (not `HashSet`) for deterministic
//! iteration order.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use lantern_kernel::carrier::state::StateKey;

use crate::node::FrontierKey;

/// Best-first frontier manager.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse` to pop the
/// lowest `(f_cost, creation_order)` first. Since every node is pushed
/// exactly once, in creation order, this pops in the same order as a list
/// that is stably re-sorted by `f_cost` after every insertion batch.
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    high_water: u64,
}

impl BestFirstFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: FrontierKey) {
        self.heap.push(Reverse(key));
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the lowest key, if any.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierKey> {
        self.heap.pop().map(|Reverse(key)| key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier ever reached.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// Configurations that have already been expanded.
#[derive(Debug, Default)]
pub struct ClosedSet {
    keys: BTreeSet<StateKey>,
}

impl ClosedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key` as expanded. Returns `false` if it already was.
    pub fn insert(&mut self, key: StateKey) -> bool {
        self.keys.insert(key)
    }

    #[must_use]
    pub fn contains(&self, key: &StateKey) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
