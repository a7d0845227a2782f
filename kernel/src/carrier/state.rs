//! `BridgeState`: one configuration of the crossing puzzle.
//!
//! Banks are kept as ordered vectors so that candidate enumeration is
//! deterministic, but identity ignores order: two states are the same
//! configuration iff their [`StateKey`]s are equal.
//!
//! The key is light side plus bank membership. Accumulated cost is not part
//! of it: a configuration reached again at a higher cost is a duplicate, so
//! the closed set stays finite (at most `2 * 2^N` keys) and every search
//! terminates.
//!
//! # Identity bytes layout
//!
//! ```text
//! [light: u8]
//! [origin_len: u32 LE][origin ids ascending: u32 LE ...]
//! [destination_len: u32 LE][destination ids ascending: u32 LE ...]
//! ```

use crate::carrier::member::{Member, MemberId, Roster};

/// One side of the crossing point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Origin,
    Destination,
}

impl Side {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Origin => Self::Destination,
            Self::Destination => Self::Origin,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Destination => "destination",
        }
    }

    fn tag(self) -> u8 {
        match self {
            Self::Origin => 0,
            Self::Destination => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of both banks, the light, and the cost so far.
///
/// Invariant: every member of the run is in exactly one bank.
#[derive(Debug, Clone)]
pub struct BridgeState {
    origin: Vec<Member>,
    destination: Vec<Member>,
    light: Side,
    accumulated_cost: i64,
    move_count: u32,
}

impl BridgeState {
    /// Root configuration: everyone on the origin bank with the light.
    #[must_use]
    pub fn initial(roster: &Roster) -> Self {
        Self {
            origin: roster.members().to_vec(),
            destination: Vec::new(),
            light: Side::Origin,
            accumulated_cost: 0,
            move_count: 0,
        }
    }

    /// Assemble a state from parts. Only the transition model calls this.
    pub(crate) fn from_parts(
        origin: Vec<Member>,
        destination: Vec<Member>,
        light: Side,
        accumulated_cost: i64,
        move_count: u32,
    ) -> Self {
        Self {
            origin,
            destination,
            light,
            accumulated_cost,
            move_count,
        }
    }

    #[must_use]
    pub fn origin(&self) -> &[Member] {
        &self.origin
    }

    #[must_use]
    pub fn destination(&self) -> &[Member] {
        &self.destination
    }

    #[must_use]
    pub fn bank(&self, side: Side) -> &[Member] {
        match side {
            Side::Origin => &self.origin,
            Side::Destination => &self.destination,
        }
    }

    /// The bank currently holding the light.
    #[must_use]
    pub fn light(&self) -> Side {
        self.light
    }

    /// Sum of per-crossing maxima so far (the `g` cost).
    #[must_use]
    pub fn accumulated_cost(&self) -> i64 {
        self.accumulated_cost
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Total members across both banks.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.origin.len() + self.destination.len()
    }

    /// Terminal iff nobody is left on the origin bank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.origin.is_empty()
    }

    /// The canonical structural identity of this configuration.
    #[must_use]
    pub fn key(&self) -> StateKey {
        StateKey {
            light: self.light,
            origin: sorted_ids(&self.origin),
            destination: sorted_ids(&self.destination),
        }
    }

    /// Canonical identity bytes (see module docs for layout).
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        self.key().to_bytes()
    }
}

impl PartialEq for BridgeState {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for BridgeState {}

impl std::hash::Hash for BridgeState {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Order-independent identity of a [`BridgeState`].
///
/// Covers light side and bank membership. Accumulated cost, move count,
/// parent links and move descriptions are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateKey {
    light: Side,
    origin: Vec<MemberId>,
    destination: Vec<MemberId>,
}

impl StateKey {
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + 8 + 4 * (self.origin.len() + self.destination.len()));
        out.push(self.light.tag());
        for bank in [&self.origin, &self.destination] {
            #[allow(clippy::cast_possible_truncation)]
            out.extend_from_slice(&(bank.len() as u32).to_le_bytes());
            for id in bank {
                out.extend_from_slice(&id.get().to_le_bytes());
            }
        }
        out
    }
}

fn sorted_ids(bank: &[Member]) -> Vec<MemberId> {
    let mut ids: Vec<MemberId> = bank.iter().map(Member::id).collect();
    ids.sort_unstable();
    ids
}
